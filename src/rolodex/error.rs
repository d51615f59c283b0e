use crate::fields::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Not enough arguments")]
    NotEnoughArguments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RolodexError {
    /// The one-line message shown to the user when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            RolodexError::Validation(e) => e.to_string(),
            RolodexError::ContactNotFound(_) => "Contact not found.".to_string(),
            RolodexError::NotEnoughArguments => "Not enough arguments.".to_string(),
            RolodexError::Api(msg) => msg.clone(),
            _ => "An unexpected error occurred.".to_string(),
        }
    }

    /// Persistence failures cannot be recovered from inside the command loop.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RolodexError::Io(_) | RolodexError::Serialization(_) | RolodexError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_error_kind() {
        assert_eq!(
            RolodexError::from(ValidationError::InvalidPhone).user_message(),
            "Phone number must be 10 digits."
        );
        assert_eq!(
            RolodexError::ContactNotFound("Bob".into()).user_message(),
            "Contact not found."
        );
        assert_eq!(
            RolodexError::NotEnoughArguments.user_message(),
            "Not enough arguments."
        );
        assert_eq!(
            RolodexError::Store("disk on fire".into()).user_message(),
            "An unexpected error occurred."
        );
    }

    #[test]
    fn only_persistence_errors_are_fatal() {
        assert!(RolodexError::Store("x".into()).is_fatal());
        assert!(!RolodexError::NotEnoughArguments.is_fatal());
        assert!(!RolodexError::from(ValidationError::InvalidBirthday).is_fatal());
    }
}
