//! REPL Module
//!
//! Reads commands line by line, dispatches them against a [`Session`] and
//! prints results.
//!
//! # Commands
//! - `help`, `exit`
//! - `map` / `mapb` - page forward and back through location areas
//! - `explore <area>` - list pokemon found in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

mod catch;
mod commands;
mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use catch::{attempt_catch, catch_rate, MAX_BASE_EXPERIENCE, MIN_BASE_EXPERIENCE};
pub use commands::{Command, Flow, Session, UnknownCommand};
pub use input::clean_input;

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command errors are printed and the loop continues; only I/O failures on
/// `input` or `out` end it with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            writeln!(out)?;
            break;
        };

        match session.dispatch(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(())
}
