//! Command-line interface for rewind.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured output format
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Mode to run
    #[command(subcommand)]
    pub mode: Mode,
}

/// Available modes
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Apply scripted commands in order and print the final view
    Play {
        /// Commands such as `c4`, `jump 2`, `sort`
        commands: Vec<String>,
    },

    /// Read commands from stdin, printing the view after each one
    Interactive,
}
