//! Interactive read-eval-print loop.
//!
//! Reads one command per line, prints the reply, and saves the book when
//! the user exits or input ends.

pub mod handlers;

pub use handlers::{AssistantBot, Reply};

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{error, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Run the assistant until `close`/`exit` or end of input.
///
/// The book is saved before the farewell is printed; a failed save is
/// returned to the caller. If reading input or writing output fails
/// mid-session the book is still saved before the error is returned.
pub fn run_session<R, W>(bot: &mut AssistantBot, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    if let Err(e) = converse(bot, input, &mut output) {
        error!("Session ended abnormally: {:#}", e);
        bot.save().context("Failed to save address book")?;
        return Err(e);
    }

    bot.save().context("Failed to save address book")?;
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}

fn converse<R, W>(bot: &mut AssistantBot, mut input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            info!("End of input, shutting down");
            writeln!(output)?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and fall through to normal dispatch
        let line = String::from_utf8_lossy(&buf);

        match bot.handle_line(&line) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Silent => {}
            Reply::Exit => return Ok(()),
        }
    }
}
