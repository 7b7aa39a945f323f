//! Tic-tac-toe with full move history and time travel.
//!
//! The core is a small game-state engine:
//!
//! - **Rules**: win detection and move application over immutable
//!   [`Board`] snapshots
//! - **History**: every snapshot since the empty board, plus a cursor
//!   that can jump to any of them
//! - **Controller**: the two intents a front end may raise
//!   ([`GameController::play`], [`GameController::jump_to`]) and the
//!   view-state it reads back
//!
//! A terminal front end and a headless replay command sit on top.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameController, GameStatus, Player, Position};
//!
//! let mut game = GameController::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleRight, Position::TopRight] {
//!     game.play(pos);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Browse back to the start; nothing is lost until a new move is played.
//! game.jump_to(0);
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Front-end modules
pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, GameController, GameStatus, GameView, HistoryError, HistoryStore, Mark,
    Move, MoveEntry, MoveError, Player, Position, RESTART_LABEL, SQUARE_COUNT, Square,
    WIN_LINES, WinningLine, evaluate, winning_line,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Replay
pub use replay::{Intent, ReplayError, replay};
