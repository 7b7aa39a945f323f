//! Game controller: intents in, derived view-state out.
//!
//! The controller owns the [`HistoryStore`] and is the only thing that
//! mutates it. Presentation code calls [`GameController::play`] and
//! [`GameController::jump_to`] and reads everything else through the
//! derived accessors or a [`GameView`] bundle.

use super::history::HistoryStore;
use super::rules::{self, WinningLine};
use super::{Board, GameStatus, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Label for the entry that returns to the empty board.
pub const RESTART_LABEL: &str = "Restart game";

/// One selectable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// Text shown to the player.
    pub label: String,
    /// History index to pass back to [`GameController::jump_to`].
    pub move_index: usize,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Snapshot at the history cursor.
    active_board: Board,
    /// History cursor.
    cursor: usize,
    /// Whether X places the next mark.
    x_is_next: bool,
    /// Derived game status.
    status: GameStatus,
    /// Completed line, if any.
    winning_line: Option<WinningLine>,
    /// Human-readable status line.
    status_text: String,
    /// One entry per recorded snapshot.
    move_list: Vec<MoveEntry>,
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status_text)?;
        writeln!(f)?;
        writeln!(f, "{}", self.active_board.display())?;
        writeln!(f)?;
        for entry in &self.move_list {
            let marker = if entry.move_index == self.cursor { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, entry.move_index, entry.label)?;
        }
        Ok(())
    }
}

/// Orchestrates history and win detection for one game.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: HistoryStore,
}

impl GameController {
    /// Creates a controller at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Occupied squares and finished boards make this a silent no-op.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn play(&mut self, pos: Position) {
        let mark = Player::for_cursor(self.history.cursor());
        match self.history.current().apply_move(pos, mark) {
            Ok(next) => {
                self.history.record_move(next);
                debug!(player = %mark, position = %pos, "Move recorded");
            }
            Err(reason) => {
                debug!(%reason, "Ignoring rejected move");
            }
        }
    }

    /// Makes history entry `move_index` the active snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `move_index` is not an index of [`GameController::move_list`].
    /// The move list is the only source of valid indices, so anything else
    /// is a caller bug.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) {
        if let Err(err) = self.history.jump_to(move_index) {
            error!(%err, "Jump outside recorded history");
            panic!("jump_to called with an index the move list never offered: {err}");
        }
    }

    /// Snapshot at the history cursor.
    pub fn active_board(&self) -> &Board {
        self.history.current()
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.history.cursor() % 2 == 0
    }

    /// Player whose turn it is at the active snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_cursor(self.history.cursor())
    }

    /// Winner of the active snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self.active_board())
    }

    /// Completed line on the active snapshot, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.active_board())
    }

    /// Derived status of the active snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    /// Human-readable status line.
    pub fn status_text(&self) -> String {
        match self.winner() {
            Some(player) => format!("WINNER! Congratulations: {}", player),
            None => format!("Player up next: {}'s", self.next_player()),
        }
    }

    /// One jump target per recorded snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|m| {
                let label = if m == 0 {
                    RESTART_LABEL.to_string()
                } else {
                    format!("Revert board back to move #{}", m)
                };
                MoveEntry::new(label, m)
            })
            .collect()
    }

    /// Bundles the derived state for rendering.
    pub fn view(&self) -> GameView {
        GameView {
            active_board: self.active_board().clone(),
            cursor: self.history.cursor(),
            x_is_next: self.x_is_next(),
            status: self.status(),
            winning_line: self.winning_line(),
            status_text: self.status_text(),
            move_list: self.move_list(),
        }
    }
}
