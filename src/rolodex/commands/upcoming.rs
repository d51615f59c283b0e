use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub fn run(book: &AddressBook, today: NaiveDate, window_days: u32) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        let message = if window_days == DEFAULT_WINDOW_DAYS {
            "No birthdays in the next week.".to_string()
        } else {
            format!("No birthdays in the next {} days.", window_days)
        };
        return Ok(CmdResult::default().with_message(CmdMessage::info(message)));
    }
    Ok(CmdResult::default().with_upcoming(upcoming))
}
