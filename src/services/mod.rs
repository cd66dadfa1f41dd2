//! Application service layer.
//!
//! Services hold the queries that look across the whole book rather than
//! a single record.

mod birthday_service;

pub use birthday_service::{upcoming_birthdays, BirthdayWindow, DEFAULT_WINDOW_DAYS};
