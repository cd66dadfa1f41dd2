//! Record model representing one person in the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of a birthday that has not been set.
pub const NO_BIRTHDAY: &str = "-";

/// A single contact: name, phone numbers and an optional birthday.
///
/// Phones keep insertion order and duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
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

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.push_phone(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new_phone` is not a valid number
    /// - `BookError::PhoneNotFound` if no phone equals `old_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new_phone)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| BookError::PhoneNotFound(old_phone.to_string()))?;
        *slot = replacement;

        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map_or(NO_BIRTHDAY, Birthday::as_str);

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
