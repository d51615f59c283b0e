//! # Upcoming Birthdays
//!
//! Finds the contacts whose next birthday falls inside a window of days starting
//! today, and the date on which to congratulate them.
//!
//! For every record with a birthday:
//!
//! 1. The anniversary in `today`'s year is the candidate. A 29 February birthday is
//!    observed on 28 February in non-leap years.
//! 2. A candidate already behind `today` rolls over to the next year, with the same
//!    leap-day rule.
//! 3. Only candidates in `[today, today + window_days]` (both ends included) are kept.
//! 4. Saturday and Sunday candidates move to the following Monday. The moved date is
//!    not checked against the window again, so it can land past the window's end.
//!
//! Results are ordered by congratulation date, then by name.
//!
//! "Today" is always an argument; nothing here reads the clock.

use crate::model::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// ISO layout used when a congratulation date is shown.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn iso_date(&self) -> String {
        self.congratulation_date.format(ISO_DATE_FORMAT).to_string()
    }
}

pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let candidate = next_anniversary(birthday, today)?;
            if candidate < today || candidate > window_end {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(candidate),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}

/// The first anniversary of `birthday` on or after `today`.
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary_in(birthday, today.year() + 1)
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Moves weekend dates to the following Monday.
pub fn congratulation_date(candidate: NaiveDate) -> NaiveDate {
    let shift = match candidate.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    candidate
        .checked_add_days(Days::new(shift))
        .unwrap_or(candidate)
}

/// Groups congratulation dates, each with its names sorted alphabetically.
pub fn group_by_date(upcoming: &[UpcomingBirthday]) -> Vec<(NaiveDate, Vec<String>)> {
    let mut grouped: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for entry in upcoming {
        grouped
            .entry(entry.congratulation_date)
            .or_default()
            .push(entry.name.clone());
    }
    grouped
        .into_iter()
        .map(|(date, mut names)| {
            names.sort();
            (date, names)
        })
        .collect()
}
