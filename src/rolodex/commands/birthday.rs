use crate::book::AddressBook;
use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.set_birthday(raw)?;
    Ok(CmdResult::default()
        .modified()
        .with_message(CmdMessage::success("Birthday added.")))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name).ok_or_else(|| not_found(name))?;
    match record.birthday() {
        Some(birthday) => Ok(CmdResult::default().with_birthday(*birthday)),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("Birthday not set."))),
    }
}
