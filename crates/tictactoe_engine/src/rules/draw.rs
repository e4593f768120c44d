//! Draw detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no complete line is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied() == Board::CELLS
}
