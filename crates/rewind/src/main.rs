//! Rewind - terminal host for time-travel tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Mode, RewindConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = RewindConfig::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Configuration resolved");

    let mut session = Session::new(&config);

    match cli.mode {
        Mode::Play { commands } => {
            session.play(&commands, std::io::stdout().lock())?;
        }
        Mode::Interactive => {
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout().lock())?;
        }
    }

    Ok(())
}
