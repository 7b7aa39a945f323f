//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is at the given history cursor.
    ///
    /// X always opens, so X moves on every even cursor.
    pub fn for_cursor(cursor: usize) -> Self {
        if cursor % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Snapshot construction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The cell sequence did not have exactly nine entries.
    #[display("Invalid board: expected {} squares, got {}", SQUARE_COUNT, len)]
    InvalidBoard {
        /// Length of the rejected sequence.
        len: usize,
    },
}

/// Immutable 3x3 board snapshot.
///
/// A board is never edited in place. [`Board::apply_move`] produces a
/// fresh snapshot, so every snapshot held by the history stays valid on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Creates a board from a complete set of squares.
    pub fn from_squares(squares: [Square; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of this board with one square replaced.
    pub(super) fn with_square(&self, pos: Position, square: Square) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = square;
        Self { squares }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their cell number (0-8), the same number a replay
    /// intent takes.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[Square]> for Board {
    type Error = BoardError;

    #[instrument(skip(squares), fields(len = squares.len()))]
    fn try_from(squares: &[Square]) -> Result<Self, Self::Error> {
        let squares: [Square; SQUARE_COUNT] = squares
            .try_into()
            .map_err(|_| BoardError::InvalidBoard { len: squares.len() })?;
        Ok(Self { squares })
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = BoardError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Self::try_from(squares.as_slice())
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares.to_vec()
    }
}

/// Current status of the game, derived from the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
}
