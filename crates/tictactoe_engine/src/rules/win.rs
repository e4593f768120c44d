//! Win detection logic for tic-tac-toe.

use crate::coord::Coord;
use crate::outcome::Line;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. When a board holds more than one complete line the
/// first one here is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new([Coord::TOP_LEFT, Coord::TOP_CENTER, Coord::TOP_RIGHT]),
    Line::new([Coord::MIDDLE_LEFT, Coord::CENTER, Coord::MIDDLE_RIGHT]),
    Line::new([Coord::BOTTOM_LEFT, Coord::BOTTOM_CENTER, Coord::BOTTOM_RIGHT]),
    // Columns
    Line::new([Coord::TOP_LEFT, Coord::MIDDLE_LEFT, Coord::BOTTOM_LEFT]),
    Line::new([Coord::TOP_CENTER, Coord::CENTER, Coord::BOTTOM_CENTER]),
    Line::new([Coord::TOP_RIGHT, Coord::MIDDLE_RIGHT, Coord::BOTTOM_RIGHT]),
    // Diagonals
    Line::new([Coord::TOP_LEFT, Coord::CENTER, Coord::BOTTOM_RIGHT]),
    Line::new([Coord::TOP_RIGHT, Coord::CENTER, Coord::BOTTOM_LEFT]),
];

/// Finds the first complete line on the board.
///
/// Returns the mark that fills it together with the line, or `None` if no
/// line holds three equal marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.coords().map(|coord| board.get(coord));
        match a {
            Cell::Occupied(mark) if a == b && a == c => Some((mark, *line)),
            _ => None,
        }
    })
}
