//! Headless replay of intents given on the command line.

use crate::games::tictactoe::{GameController, Position};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{info, instrument};

/// An intent the presentation layer can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the next mark on a cell.
    Play(Position),
    /// Move the history cursor.
    JumpTo(usize),
}

/// A replay script could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// The token is neither a cell nor a jump.
    #[display("Unrecognized intent '{}' (expected N or pN for a cell 0-8, jM for a move)", _0)]
    InvalidIntent(#[error(not(source))] String),

    /// A jump named a move that has not been recorded.
    #[display("Cannot jump to move {}: history has {} entries", index, len)]
    JumpOutOfRange {
        /// Requested move.
        index: usize,
        /// History length when the jump was attempted.
        len: usize,
    },
}

impl FromStr for Intent {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let invalid = || ReplayError::InvalidIntent(s.to_string());

        if let Some(rest) = token.strip_prefix('j') {
            let index = rest.parse::<usize>().map_err(|_| invalid())?;
            return Ok(Intent::JumpTo(index));
        }

        let cell = token.strip_prefix('p').unwrap_or(&token);
        Position::from_label_or_number(cell)
            .map(Intent::Play)
            .ok_or_else(invalid)
    }
}

/// Applies intents in order to a fresh game.
///
/// Jumps are checked against the history first. Command-line input is
/// not a trusted caller, so a bad jump is an error here rather than a
/// controller panic.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent]) -> Result<GameController, ReplayError> {
    let mut game = GameController::new();
    for intent in intents {
        match *intent {
            Intent::Play(pos) => game.play(pos),
            Intent::JumpTo(index) => {
                let len = game.history().len();
                if index >= len {
                    return Err(ReplayError::JumpOutOfRange { index, len });
                }
                game.jump_to(index);
            }
        }
    }
    info!(
        cursor = game.history().cursor(),
        len = game.history().len(),
        "Replay finished"
    );
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intents() {
        assert_eq!("4".parse::<Intent>(), Ok(Intent::Play(Position::Center)));
        assert_eq!("p0".parse::<Intent>(), Ok(Intent::Play(Position::TopLeft)));
        assert_eq!("J3".parse::<Intent>(), Ok(Intent::JumpTo(3)));
        assert_eq!("center".parse::<Intent>(), Ok(Intent::Play(Position::Center)));
        assert!(matches!(
            "9".parse::<Intent>(),
            Err(ReplayError::InvalidIntent(_))
        ));
        assert!(matches!(
            "jump".parse::<Intent>(),
            Err(ReplayError::InvalidIntent(_))
        ));
    }

    #[test]
    fn test_replay_rejects_unrecorded_jump() {
        let intents = [Intent::Play(Position::Center), Intent::JumpTo(2)];
        assert_eq!(
            replay(&intents).unwrap_err(),
            ReplayError::JumpOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_replay_accepts_jump_to_last_recorded_move() {
        let intents = [
            Intent::Play(Position::Center),
            Intent::Play(Position::TopLeft),
            Intent::JumpTo(0),
            Intent::JumpTo(2),
        ];
        let game = replay(&intents).unwrap();
        assert_eq!(game.history().cursor(), 2);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_text_view_numbers_parse_to_same_cell() {
        let game = replay(&[Intent::Play(Position::Center)]).unwrap();
        let text = game.view().to_string();
        let rows: Vec<Vec<&str>> = text
            .lines()
            .filter(|line| line.contains('|'))
            .map(|line| line.split('|').collect())
            .collect();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0][0], "0");
        assert_eq!(
            rows[0][0].parse::<Intent>(),
            Ok(Intent::Play(Position::TopLeft))
        );

        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let pos = Position::from_index(row * 3 + col).unwrap();
                if game.active_board().is_empty(pos) {
                    assert_eq!(cell.parse::<Intent>(), Ok(Intent::Play(pos)));
                } else {
                    assert_eq!(*cell, "X");
                }
            }
        }
    }

    #[test]
    fn test_replay_branches_after_jump() {
        let intents: Vec<Intent> = ["0", "4", "1", "j1", "8"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let game = replay(&intents).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.history().cursor(), 2);
        assert!(game.active_board().is_empty(Position::Center));
    }
}
