//! Contact Book - an interactive command-line address book.
//!
//! Stores names, phone numbers and birthdays, answers lookup and edit
//! commands, and lists contacts whose birthday is coming up.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday)
//! - **models**: Contact record and the address book
//! - **error**: Error types and the user-facing message translation
//! - **config**: Configuration from environment variables
//! - **repositories**: Persistence of the whole book
//! - **services**: Upcoming-birthday window query
//! - **commands**: User-facing command operations
//! - **cli**: Command dispatch and the read-eval-print loop

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::{AssistantBot, Reply};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, JsonFileRepository};
