//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// User-facing text for an invalid phone, invalid date or unknown phone.
pub const NO_SUCH_NUMBER: &str = "There is no such number in the database";

/// User-facing text for a contact that is not in the book.
pub const NO_SUCH_USER: &str = "There is no such user in the database";

/// User-facing text for a command given the wrong number of arguments.
pub const INDEX_OUT_OF_RANGE: &str = "Index out of range";

/// Errors raised by record and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone with this value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// The command was given too few or too many arguments
    #[error("Command '{command}' expects {expected} argument(s), got {got}")]
    ArgumentCount {
        command: String,
        expected: String,
        got: usize,
    },
}

impl BookError {
    /// Translate the failure into one of the fixed user-facing messages.
    ///
    /// The mapping is coarse on purpose: the returned text never contains
    /// the offending value.
    pub fn user_message(&self) -> &'static str {
        match self {
            BookError::Validation(_) | BookError::PhoneNotFound(_) => NO_SUCH_NUMBER,
            BookError::ContactNotFound(_) => NO_SUCH_USER,
            BookError::ArgumentCount { .. } => INDEX_OUT_OF_RANGE,
        }
    }
}

/// Errors that can occur while reading or writing the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid address book
    #[error("Corrupt address book file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the book failed
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John");

        let err = BookError::Validation(ValidationError::InvalidPhone("12".to_string()));
        assert_eq!(err.to_string(), "Invalid phone number: 12");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_user_message_mapping() {
        let invalid_phone = BookError::from(ValidationError::InvalidPhone("x".to_string()));
        let invalid_date = BookError::from(ValidationError::InvalidDate("x".to_string()));
        assert_eq!(invalid_phone.user_message(), NO_SUCH_NUMBER);
        assert_eq!(invalid_date.user_message(), NO_SUCH_NUMBER);
        assert_eq!(
            BookError::PhoneNotFound("1111111111".to_string()).user_message(),
            NO_SUCH_NUMBER
        );
        assert_eq!(
            BookError::ContactNotFound("Ghost".to_string()).user_message(),
            NO_SUCH_USER
        );
        let arity = BookError::ArgumentCount {
            command: "show".to_string(),
            expected: "1".to_string(),
            got: 0,
        };
        assert_eq!(arity.user_message(), INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_user_message_hides_detail() {
        let err = BookError::PhoneNotFound("5555555555".to_string());
        assert!(!err.user_message().contains("5555555555"));
    }

    #[test]
    fn test_argument_count_display() {
        let err = BookError::ArgumentCount {
            command: "change".to_string(),
            expected: "3".to_string(),
            got: 1,
        };
        assert!(err.to_string().contains("change"));
        assert!(err.to_string().contains("got 1"));
    }
}
