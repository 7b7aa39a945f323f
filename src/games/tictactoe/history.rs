//! Snapshot history with a movable cursor.
//!
//! The history is a sequence of board snapshots starting from the empty
//! board, plus a cursor naming the active one. Jumping moves only the
//! cursor; recording a move after a jump drops the abandoned future.

use super::{Board, Move, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// A history index did not name a recorded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested index is past the end of the history.
    #[display("History index {} out of range (length {})", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Ordered board snapshots and the active cursor.
///
/// Never empty: index 0 always holds the empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl HistoryStore {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Index of the active snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Appends a snapshot after the cursor and makes it active.
    ///
    /// Anything recorded after the cursor is discarded first. The caller
    /// is expected to have produced `next` through `Board::apply_move`.
    #[instrument(skip(self, next), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record_move(&mut self, next: Board) {
        let dropped = self.snapshots.len() - (self.cursor + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding abandoned branch");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Makes snapshot `index` active without altering the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if `index >= len()`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.cursor, to = index, "Moving history cursor");
        self.cursor = index;
        Ok(())
    }

    /// The move that produced snapshot `index`.
    ///
    /// Recovered by comparing the snapshot with its predecessor. Returns
    /// `None` for index 0 and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;
        Position::ALL.into_iter().find_map(|pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
