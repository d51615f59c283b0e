use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str, old_phone: &str, new_phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;

    if record.edit_phone(old_phone, new_phone)? {
        Ok(CmdResult::default()
            .modified()
            .with_message(CmdMessage::success("Phone updated.")))
    } else {
        Ok(CmdResult::default().with_message(CmdMessage::warning("Old phone not found.")))
    }
}
