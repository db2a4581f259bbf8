//! Text commands understood by the host.
//!
//! Grammar, case-insensitive: `click <n>` / `c<n>`, `jump <n>` / `j<n>`,
//! `sort` / `s`, `quit` / `q`.

use derive_more::{Display, Error};
use rewind_tictactoe::Intent;
use std::str::FromStr;
use tracing::instrument;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the game.
    Intent(Intent),
    /// Stop reading input.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {:?}: {} at {}:{}", input, reason, file, line)]
pub struct CommandParseError {
    /// The offending input.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            reason: reason.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

fn number(input: &str, arg: &str) -> Result<usize, CommandParseError> {
    arg.trim()
        .parse()
        .map_err(|_| CommandParseError::new(input, format!("expected a number, got {:?}", arg)))
}

impl FromStr for Command {
    type Err = CommandParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let (word, arg) = match input.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg),
            None => {
                let split = input
                    .find(|c: char| c.is_ascii_digit())
                    .unwrap_or(input.len());
                input.split_at(split)
            }
        };

        match word {
            "click" | "c" => Ok(Command::Intent(Intent::Click(number(s, arg)?))),
            "jump" | "j" => Ok(Command::Intent(Intent::JumpTo(number(s, arg)?))),
            "sort" | "s" if arg.trim().is_empty() => Ok(Command::Intent(Intent::ToggleSortOrder)),
            "quit" | "q" | "exit" if arg.trim().is_empty() => Ok(Command::Quit),
            "" => Err(CommandParseError::new(s, "empty command")),
            other => Err(CommandParseError::new(s, format!("unknown command {:?}", other))),
        }
    }
}
