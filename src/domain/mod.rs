//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated fields of a
//! contact: phone numbers and birthdays. These value objects validate at
//! construction time and prevent invalid data from being represented in
//! the address book.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
