//! A single play session: one game fed by text commands.

use crate::command::Command;
use crate::config::{OutputFormat, RewindConfig};
use anyhow::Result;
use rewind_tictactoe::{Game, GameView, Intent};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Result of feeding one line to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The command was applied (or, for clicks, possibly ignored).
    Applied,
    /// The command was refused; the message says why.
    Refused(String),
    /// The session should end.
    Quit,
}

/// Owns the game for one run of the host.
#[derive(Debug)]
pub struct Session {
    game: Game,
    format: OutputFormat,
}

impl Session {
    /// Starts a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &RewindConfig) -> Self {
        info!(sort_ascending = *config.sort_ascending(), "Starting session");
        Self {
            game: Game::with_sort_order(*config.sort_ascending()),
            format: *config.output(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Parses and applies one input line.
    #[instrument(skip(self))]
    pub fn feed(&mut self, line: &str) -> Step {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unparseable input");
                return Step::Refused(format!("{}: {}", e.input.trim(), e.reason));
            }
        };

        match command {
            Command::Quit => Step::Quit,
            Command::Intent(intent) => self.apply(intent),
        }
    }

    /// Applies an intent to the game.
    pub fn apply(&mut self, intent: Intent) -> Step {
        match self.game.dispatch(intent) {
            Ok(_) => Step::Applied,
            Err(rejection) => Step::Refused(rejection.to_string()),
        }
    }

    /// Renders the current view in the configured format.
    pub fn render(&self) -> Result<String> {
        render(self.game.view(), self.format)
    }

    /// Applies scripted commands in order, then writes the final view.
    ///
    /// Refusals are written to `out` as `! <reason>` notices as they occur.
    #[instrument(skip_all, fields(commands = commands.len()))]
    pub fn play<S: AsRef<str>, W: Write>(&mut self, commands: &[S], mut out: W) -> Result<()> {
        for command in commands {
            match self.feed(command.as_ref()) {
                Step::Applied => {}
                Step::Refused(reason) => {
                    warn!(%reason, "Command refused");
                    writeln!(out, "! {}", reason)?;
                }
                Step::Quit => break,
            }
        }
        writeln!(out, "{}", self.render()?)?;
        Ok(())
    }

    /// Reads commands until end of input or `quit`, writing the view after
    /// each line.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.render()?)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.feed(&line) {
                Step::Quit => break,
                Step::Refused(reason) => {
                    warn!(%reason, "Command refused");
                    writeln!(out, "! {}", reason)?;
                }
                Step::Applied => writeln!(out, "{}", self.render()?)?,
            }
        }
        info!(steps = self.game.state().history().len(), "Session finished");
        Ok(())
    }
}

/// Renders a view as text or pretty JSON.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => view.render_text(),
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
    })
}
