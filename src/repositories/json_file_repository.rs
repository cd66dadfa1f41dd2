//! JSON file implementation of BookRepository.

use super::traits::BookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default file name used when no path is configured.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Stores the address book as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling scratch file: the full file name plus `.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_BOOK_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.display_path(),
            source,
        }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_FILE)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No address book at {:?}, starting empty", self.path);
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: self.display_path(),
                source,
            })?;

        info!("Loaded {} contact(s) from {:?}", book.len(), self.path);
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let content = serde_json::to_string_pretty(book)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, content)
            .and_then(|_| fs::rename(&temp_path, &self.path))
        {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {:?}: {}", temp_path, cleanup);
                }
            }
            return Err(self.io_error(e));
        }

        debug!("Saved {} contact(s) to {:?}", book.len(), self.path);
        Ok(())
    }
}
