//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are kept apart from
//! history storage so the controller can compose them.

pub mod placement;
pub mod win;

pub use win::{LINES, WinningLine, evaluate, winning_line};
