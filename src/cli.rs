//! Command-line interface for tictactoe_rewind.

use crate::replay::Intent;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-Tac-Toe Rewind - play, then travel back through the moves
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe_rewind.toml")]
        config: PathBuf,
    },

    /// Apply intents headlessly and print the resulting view
    Replay {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Intents in order: N or pN plays cell N (0-8), jM jumps to move M
        #[arg(required = true)]
        intents: Vec<Intent>,
    },
}

/// How `replay` prints the final view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status line, board and move list
    Text,
    /// The view as JSON
    Json,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictactoe_rewind.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe_rewind"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Play { .. }));
    }

    #[test]
    fn test_replay_parses_intents() {
        let cli =
            Cli::try_parse_from(["tictactoe_rewind", "replay", "--format", "json", "4", "j0"])
                .unwrap();
        match cli.command {
            Some(Command::Replay { format, intents }) => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(intents, vec![Intent::Play(Position::Center), Intent::JumpTo(0)]);
            }
            other => panic!("Expected replay, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_bad_intent() {
        assert!(Cli::try_parse_from(["tictactoe_rewind", "replay", "x"]).is_err());
    }
}
