use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    if !book.delete(name) {
        return Err(not_found(name));
    }
    Ok(CmdResult::default()
        .modified()
        .with_message(CmdMessage::success("Contact deleted.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn deletes_contact() {
        let mut book = AddressBook::new();
        add::run(&mut book, "John", "1111111111").unwrap();

        let result = run(&mut book, "John").unwrap();
        assert!(result.modified);
        assert!(book.is_empty());
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "John").unwrap_err().user_message(),
            "Contact not found."
        );
    }
}
