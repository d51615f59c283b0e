use crate::birthdays::UpcomingBirthday;
use crate::config::RolodexConfig;
use crate::error::RolodexError;
use crate::fields::{Birthday, PhoneNumber};
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod all;
pub mod birthday;
pub mod change;
pub mod config;
pub mod delete;
pub mod phone;
pub mod upcoming;

#[derive(Debug, Clone)]
pub struct RolodexPaths {
    /// Directory holding `rolodex.json`
    pub data_dir: PathBuf,
    /// The address book file
    pub book_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub phones: Vec<PhoneNumber>,
    pub birthday: Option<Birthday>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
    /// Whether the address book changed and needs saving
    pub modified: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<PhoneNumber>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_config(mut self, config: RolodexConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}

pub(crate) fn not_found(name: &str) -> RolodexError {
    RolodexError::ContactNotFound(name.to_string())
}
