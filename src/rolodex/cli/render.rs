//! # Rendering
//!
//! Turns a `CmdResult` into terminal lines. Data (phones, contacts, birthdays) is
//! written plain; status messages are colored by level.

use colored::Colorize;
use rolodex::api::{CmdMessage, CmdResult, MessageLevel};
use rolodex::birthdays::group_by_date;
use rolodex::birthdays::ISO_DATE_FORMAT;
use rolodex::model::Record;
use std::io::{self, Write};

pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if !result.phones.is_empty() {
        let phones: Vec<&str> = result.phones.iter().map(|p| p.as_str()).collect();
        writeln!(out, "{}", phones.join(", "))?;
    }

    for record in &result.listed_records {
        writeln!(out, "{}", contact_line(record))?;
    }

    if let Some(birthday) = &result.birthday {
        writeln!(out, "{}", birthday)?;
    }

    for (date, names) in group_by_date(&result.upcoming) {
        writeln!(out, "{}: {}", date.format(ISO_DATE_FORMAT), names.join(", "))?;
    }

    if let Some(config) = &result.config {
        writeln!(out, "window-days = {}", config.window_days)?;
        writeln!(out, "file-name = {}", config.file_name)?;
    }

    write_messages(out, &result.messages)
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

fn contact_line(record: &Record) -> String {
    let phones = if record.phones().is_empty() {
        "no phones".to_string()
    } else {
        record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    };
    let birthday = record
        .birthday()
        .map(|b| b.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("{}: {}; birthday: {}", record.name(), phones, birthday)
}
