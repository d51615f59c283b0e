use crate::fields::{Birthday, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// One contact: a name, its phone numbers in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData", into = "RecordData")]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneNumber, ValidationError> {
        let phone = PhoneNumber::create(raw)?;
        self.phones.push(phone.clone());
        Ok(phone)
    }

    /// Removes the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new` in place.
    ///
    /// Returns `Ok(false)` when `old` is not present. `new` is validated before
    /// anything is touched, so a rejected number leaves the phone list as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(pos) = self.position_of(old) else {
            return Ok(false);
        };
        self.phones[pos] = PhoneNumber::create(new)?;
        Ok(true)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validates and stores the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<Birthday, ValidationError> {
        let birthday = Birthday::create(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

// On-disk shape of a record; converting back re-checks the name.
#[derive(Serialize, Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = ValidationError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name)?;
        record.phones = data.phones;
        record.birthday = data.birthday;
        Ok(record)
    }
}

impl From<Record> for RecordData {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            phones: record.phones,
            birthday: record.birthday,
        }
    }
}
