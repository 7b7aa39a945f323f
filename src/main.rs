//! Tic-Tac-Toe Rewind - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_rewind::cli::{Cli, Command, OutputFormat};
use tictactoe_rewind::{AppConfig, Intent, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => {
            let config = AppConfig::load_or_default(&config)
                .with_context(|| format!("Failed to load config {}", config.display()))?;
            tui::run_tui(&config)
        }
        Command::Replay { format, intents } => run_replay(format, &intents),
    }
}

/// Replays intents and prints the final view to stdout.
fn run_replay(format: OutputFormat, intents: &[Intent]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?format, "Replaying intents");
    let game = replay(intents)?;
    let view = game.view();

    match format {
        OutputFormat::Text => print!("{}", view),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize view")?
        ),
    }
    Ok(())
}
