//! Birthday commands: add-birthday, show-birthday, birthdays.

use super::exact_args;
use crate::domain::Birthday;
use crate::error::BookResult;
use crate::models::{AddressBook, Record};
use crate::services::upcoming_birthdays;
use chrono::NaiveDate;
use tracing::debug;

pub const BIRTHDAY_ADDED: &str = "Birthday added successfully";
pub const NO_NAME_FOUND: &str = "No name found";
pub const INVALID_BIRTHDAY: &str = "Invalid date format. Use DD.MM.YYYY";
pub const ADD_BIRTHDAY_USAGE: &str = "Usage: add-birthday <name> <DD.MM.YYYY>";
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays";

/// `add-birthday <name> <DD.MM.YYYY>`
///
/// Answers with its own messages instead of the shared error translation.
/// The contact is looked up before the date is parsed.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> String {
    let Ok([name, text]) = exact_args::<2>("add-birthday", args) else {
        return ADD_BIRTHDAY_USAGE.to_string();
    };

    let Some(record) = book.find_mut(name) else {
        return NO_NAME_FOUND.to_string();
    };

    match Birthday::new(text) {
        Ok(birthday) => {
            record.set_birthday(birthday);
            BIRTHDAY_ADDED.to_string()
        }
        Err(e) => {
            debug!("Rejected birthday for {}: {}", name, e);
            INVALID_BIRTHDAY.to_string()
        }
    }
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let [name] = exact_args::<1>("show-birthday", args)?;

    let message = match book.find(name).and_then(|r| r.birthday().map(|b| (r, b))) {
        Some((record, birthday)) => format!("{}'s birthday: {}", record.name(), birthday),
        None => format!("No birthday information found for {}", name),
    };

    Ok(message)
}

/// `birthdays`
pub fn show_upcoming_birthdays(book: &AddressBook, today: NaiveDate, days: u32) -> String {
    let upcoming = upcoming_birthdays(book, today, days);

    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }

    upcoming
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
