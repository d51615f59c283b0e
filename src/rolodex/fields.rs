//! Validated field values.
//!
//! [`PhoneNumber`] and [`Birthday`] can only be obtained through their `create`
//! constructors (or deserialization, which goes through the same checks), so any
//! value of these types satisfies its format rules. Both are immutable: a
//! [`Record`](crate::model::Record) replaces them rather than editing them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Textual birthday format, `DD.MM.YYYY`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number must be 10 digits.")]
    InvalidPhone,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday,

    #[error("Name cannot be empty.")]
    EmptyName,
}

/// A phone number made of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim();
        if normalized.len() != PHONE_DIGITS || !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

/// A calendar date with no time zone, written as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY` with exactly two day digits, two month digits and four
    /// year digits. Impossible dates such as `31.02.2020` are rejected.
    pub fn create(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if !has_birthday_shape(raw) {
            return Err(ValidationError::InvalidBirthday);
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// chrono accepts unpadded and signed fields, the textual format does not.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
