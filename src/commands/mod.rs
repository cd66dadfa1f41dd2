//! User-facing command operations.
//!
//! Each operation takes the parsed argument list plus the address book and
//! returns the text to show the user. Failures come back as `BookError` and
//! are turned into fixed messages once, by [`translate`], at the dispatch
//! boundary.

pub mod birthdays;
pub mod contacts;

pub use birthdays::{add_birthday, show_birthday, show_upcoming_birthdays};
pub use contacts::{add_contact, change_contact, show_all_contacts, show_contact};

use crate::error::{BookError, BookResult};
use std::str::FromStr;
use tracing::debug;

/// Shown by `show` and `all` when there is nothing to display.
pub const NO_CONTACTS_FOUND: &str = "No contacts found";

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Show,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "show" => Ok(Command::Show),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// Split a raw input line into a lower-cased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// Turn an operation result into the text shown to the user.
pub fn translate(result: BookResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            debug!("Command failed: {}", e);
            e.user_message().to_string()
        }
    }
}

/// Require exactly `N` arguments.
pub(crate) fn exact_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> BookResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| BookError::ArgumentCount {
        command: command.to_string(),
        expected: N.to_string(),
        got: args.len(),
    })
}
