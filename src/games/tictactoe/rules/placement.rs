//! Move application: one snapshot in, a new snapshot out.

use super::super::{Board, MoveError, Player, Position, Square};
use super::win::evaluate;
use tracing::instrument;

impl Board {
    /// Places `mark` at `pos`, returning the resulting snapshot.
    ///
    /// `self` is left untouched. A board that already has a winner accepts
    /// no further moves.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyWon`] if the board has a winner.
    /// - [`MoveError::CellOccupied`] if the square is not empty.
    #[instrument(skip(self), fields(occupied = self.occupied_count()))]
    pub fn apply_move(&self, pos: Position, mark: Player) -> Result<Board, MoveError> {
        if let Some(winner) = evaluate(self) {
            return Err(MoveError::GameAlreadyWon(winner));
        }

        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        Ok(self.with_square(pos, Square::Occupied(mark)))
    }
}
