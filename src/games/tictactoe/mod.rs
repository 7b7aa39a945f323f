mod action;
mod controller;
mod history;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use controller::{GameController, GameView, MoveEntry, RESTART_LABEL};
pub use history::{HistoryError, HistoryStore};
pub use position::Position;
pub use rules::{LINES as WIN_LINES, WinningLine, evaluate, winning_line};
pub use types::{Board, BoardError, GameStatus, Player, SQUARE_COUNT, Square};

/// Alias for the symbol a player places.
pub type Mark = Player;
