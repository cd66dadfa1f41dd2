//! Contact Book - Main entry point
//!
//! Interactive assistant bot that keeps names, phone numbers and birthdays
//! in a local address book file.

use anyhow::Result;
use contact_book::cli::{run_session, AssistantBot};
use contact_book::repositories::JsonFileRepository;
use contact_book::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the log filter
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the conversation on stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {:?}", config.book_path);

    let repository = JsonFileRepository::new(&config.book_path);
    let mut bot = match AssistantBot::open(Box::new(repository)) {
        Ok(bot) => bot.with_birthday_window(config.birthday_window_days),
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    run_session(&mut bot, stdin.lock(), io::stdout())?;

    info!("Contact book shutdown complete");
    Ok(())
}
