//! Terminal host for time-travel tic-tac-toe.
//!
//! Loads configuration, parses text commands, and drives a
//! [`rewind_tictactoe::Game`], printing its view as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod session;

pub use cli::{Cli, Mode};
pub use command::{Command, CommandParseError};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, OutputFormat, RewindConfig};
pub use session::{Session, Step, render};
