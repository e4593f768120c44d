//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so the engine and the invariant checks share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Decides the outcome of a board after `turns` placements.
///
/// A complete line wins, checked in [`LINES`] order. Otherwise the game is a
/// tie once all nine cells have been played.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, turns: u8) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Win { mark, line };
    }
    if usize::from(turns) == Board::CELLS {
        return Outcome::Tie;
    }
    Outcome::InProgress
}
