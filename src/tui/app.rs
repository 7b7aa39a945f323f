//! Application state and key handling.

use crate::games::tictactoe::{GameController, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::input::{digit_position, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the square cursor.
    #[default]
    Board,
    /// Arrow keys move through the history entries.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Holds no game logic of its own. Keys become controller intents and
/// everything drawn comes from the controller's derived state.
#[derive(Debug, Default)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Square highlighted on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, focus = ?self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.game.history().cursor();
            }
            KeyCode::Char('r') => self.jump(0),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(key) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        match key {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_move),
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        self.game.play(pos);
        self.selected_move = self.game.history().cursor();
    }

    fn jump(&mut self, move_index: usize) {
        self.game.jump_to(move_index);
        self.selected_move = move_index;
    }
}
