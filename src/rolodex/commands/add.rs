use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// Adds `phone` to the contact called `name`, creating the contact if needed.
///
/// The phone is validated before a new contact is inserted, so a rejected number
/// never leaves an empty contact behind.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::default()
            .modified()
            .with_message(CmdMessage::success("Contact updated.")));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::default()
        .modified()
        .with_message(CmdMessage::success("Contact added.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::fields::ValidationError;

    #[test]
    fn creates_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "John", "0501234567").unwrap();

        assert!(result.modified);
        assert_eq!(result.messages[0].content, "Contact added.");
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn appends_to_existing_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "John", "0501234567").unwrap();
        let result = run(&mut book, "John", "0670000000").unwrap();

        assert_eq!(result.messages[0].content, "Contact updated.");
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "John", "12345").unwrap_err();

        assert!(matches!(
            err,
            RolodexError::Validation(ValidationError::InvalidPhone)
        ));
        assert!(book.find("John").is_none());
    }

    #[test]
    fn invalid_phone_keeps_existing_phones() {
        let mut book = AddressBook::new();
        run(&mut book, "John", "0501234567").unwrap();
        assert!(run(&mut book, "John", "abc").is_err());
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }
}
