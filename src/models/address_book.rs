//! The in-memory collection of all records, keyed by name.

use super::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk shape of the book: a flat list of records.
///
/// Keys are rebuilt from each record's name when loading, so a stored book
/// cannot have a key that disagrees with its record.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookFile {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

/// All contacts, keyed by name.
///
/// Names are unique; adding a record whose name already exists replaces
/// the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookFile", into = "BookFile")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Every record, ordered by name.
    pub fn values(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<BookFile> for AddressBook {
    fn from(file: BookFile) -> Self {
        let mut book = AddressBook::new();
        for record in file.contacts {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookFile {
    fn from(book: AddressBook) -> Self {
        BookFile {
            contacts: book.records.into_values().collect(),
        }
    }
}
