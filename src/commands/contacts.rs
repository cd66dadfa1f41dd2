//! Contact commands: add, change, show, all.

use super::{exact_args, NO_CONTACTS_FOUND};
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record};
use tracing::info;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";

/// `add <name> <phone...>`
///
/// Creates the contact if needed and appends every phone. All phones are
/// validated before anything is written, so a bad number leaves the book
/// as it was.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let (name, phones) = args.split_first().ok_or_else(|| BookError::ArgumentCount {
        command: "add".to_string(),
        expected: "at least 1".to_string(),
        got: 0,
    })?;

    let phones = phones
        .iter()
        .map(|p| PhoneNumber::new(*p))
        .collect::<Result<Vec<_>, _>>()?;

    let message = match book.find_mut(name) {
        Some(record) => {
            phones.into_iter().for_each(|p| record.push_phone(p));
            CONTACT_UPDATED
        }
        None => {
            let mut record = Record::new(*name);
            phones.into_iter().for_each(|p| record.push_phone(p));
            book.add_record(record);
            info!("Added contact {}", name);
            CONTACT_ADDED
        }
    };

    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] = exact_args::<3>("change", args)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok(CONTACT_UPDATED.to_string())
}

/// `show <name>`
pub fn show_contact(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let [name] = exact_args::<1>("show", args)?;

    Ok(book
        .find(name)
        .map_or_else(|| NO_CONTACTS_FOUND.to_string(), Record::to_string))
}

/// `all`
pub fn show_all_contacts(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok(NO_CONTACTS_FOUND.to_string());
    }

    Ok(book
        .values()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
