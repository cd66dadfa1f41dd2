//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted for birthdays, as a chrono pattern.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, so the field widths are
// checked separately.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday parsed from `DD.MM.YYYY`.
///
/// Keeps the text as the user typed it for display, and the parsed
/// calendar date for comparisons.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("23.10.1990").unwrap();
/// assert_eq!(birthday.as_str(), "23.10.1990");
/// assert_eq!(birthday.month_day(), (10, 23));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for wrong separators, wrong
    /// field widths, non-numeric fields or dates that do not exist.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if !BIRTHDAY_SHAPE.is_match(&text) {
            return Err(ValidationError::InvalidDate(text));
        }

        match NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(_) => Err(ValidationError::InvalidDate(text)),
        }
    }

    /// The birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `(month, day)` pair used by the upcoming-birthday window.
    pub fn month_day(&self) -> (u32, u32) {
        (self.date.month(), self.date.day())
    }
}

// Serde support - serialize as the original text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
