use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    if record.phones().is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No phones.")));
    }
    Ok(CmdResult::default().with_phones(record.phones().to_vec()))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    if record.remove_phone(phone) {
        Ok(CmdResult::default()
            .modified()
            .with_message(CmdMessage::success("Phone removed.")))
    } else {
        Ok(CmdResult::default().with_message(CmdMessage::warning("Phone not found.")))
    }
}
