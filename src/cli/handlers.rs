//! Command dispatch for the assistant bot.
//!
//! Maps a parsed command onto its operation, applies the shared error
//! translation, and owns the address book plus the repository it came from.

use crate::commands::{self, Command};
use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use crate::services::DEFAULT_WINDOW_DAYS;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the driver should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Message(String),
    /// Nothing to print (blank line).
    Silent,
    /// Save and stop.
    Exit,
}

/// The interactive contact assistant.
pub struct AssistantBot {
    book: AddressBook,
    repository: Box<dyn BookRepository>,
    birthday_window_days: u32,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl AssistantBot {
    /// Load the book from `repository` and build a bot around it.
    pub fn open(repository: Box<dyn BookRepository>) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Assistant started with {} contact(s)", book.len());

        Ok(Self {
            book,
            repository,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            today: Box::new(|| Local::now().date_naive()),
        })
    }

    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    /// Replace the clock used by `birthdays`.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Write the current book back to the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)?;
        info!("Saved {} contact(s)", self.book.len());
        Ok(())
    }

    /// Handle one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((word, args)) = commands::parse_input(line) else {
            return Reply::Silent;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("{}", e);
                return Reply::Message(INVALID_COMMAND.to_string());
            }
        };

        debug!("Dispatching {:?} with {} argument(s)", command, args.len());

        let message = match command {
            Command::Exit => return Reply::Exit,
            Command::Hello => GREETING.to_string(),
            Command::Add => commands::translate(commands::add_contact(&args, &mut self.book)),
            Command::Change => {
                commands::translate(commands::change_contact(&args, &mut self.book))
            }
            Command::Show => commands::translate(commands::show_contact(&args, &self.book)),
            Command::All => commands::translate(commands::show_all_contacts(&self.book)),
            Command::AddBirthday => commands::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => {
                commands::translate(commands::show_birthday(&args, &self.book))
            }
            Command::Birthdays => commands::show_upcoming_birthdays(
                &self.book,
                (self.today)(),
                self.birthday_window_days,
            ),
        };

        Reply::Message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{INDEX_OUT_OF_RANGE, NO_SUCH_NUMBER, NO_SUCH_USER};
    use crate::repositories::JsonFileRepository;
    use tempfile::TempDir;

    fn setup_bot() -> (AssistantBot, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repository = JsonFileRepository::new(temp_dir.path().join("book.json"));
        let bot = AssistantBot::open(Box::new(repository))
            .unwrap()
            .with_clock(|| NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        (bot, temp_dir)
    }

    fn say(bot: &mut AssistantBot, line: &str) -> String {
        match bot.handle_line(line) {
            Reply::Message(text) => text,
            other => panic!("Expected a message for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_hello_and_unknown() {
        let (mut bot, _temp_dir) = setup_bot();
        assert_eq!(say(&mut bot, "hello"), GREETING);
        assert_eq!(say(&mut bot, "HELLO"), GREETING);
        assert_eq!(say(&mut bot, "dance"), INVALID_COMMAND);
    }

    #[test]
    fn test_blank_and_exit() {
        let (mut bot, _temp_dir) = setup_bot();
        assert_eq!(bot.handle_line("   "), Reply::Silent);
        assert_eq!(bot.handle_line("exit"), Reply::Exit);
        assert_eq!(bot.handle_line("close"), Reply::Exit);
    }

    #[test]
    fn test_error_translation_at_dispatch() {
        let (mut bot, _temp_dir) = setup_bot();
        assert_eq!(say(&mut bot, "add John 123"), NO_SUCH_NUMBER);
        assert_eq!(say(&mut bot, "change Nobody 1111111111 2222222222"), NO_SUCH_USER);
        assert_eq!(say(&mut bot, "show"), INDEX_OUT_OF_RANGE);
        assert_eq!(say(&mut bot, "add"), INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_birthdays_uses_clock_and_window() {
        let (bot, _temp_dir) = setup_bot();
        let mut bot = bot.with_birthday_window(2);
        say(&mut bot, "add John 1234567890");
        say(&mut bot, "add-birthday John 23.05.1990");
        assert_eq!(say(&mut bot, "birthdays"), "No upcoming birthdays");

        let mut bot = bot.with_birthday_window(7);
        assert_eq!(
            say(&mut bot, "birthdays"),
            "Contact name: John, phones: 1234567890, birthday: 23.05.1990"
        );
    }

    #[test]
    fn test_save_persists_book() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.json");

        let mut bot = AssistantBot::open(Box::new(JsonFileRepository::new(&path))).unwrap();
        say(&mut bot, "add John 1234567890");
        bot.save().unwrap();

        let reopened = AssistantBot::open(Box::new(JsonFileRepository::new(&path))).unwrap();
        assert!(reopened.book().find("John").is_some());
    }
}
