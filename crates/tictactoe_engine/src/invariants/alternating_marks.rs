//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::engine::GameState;
use crate::types::Mark;

/// Invariant: players alternate, X first.
///
/// X has placed as many marks as O or one more. While the game runs the
/// current mark is whoever is due next; once it ends the current mark stays
/// on the player who made the final placement.
pub struct MarksAlternate;

impl Invariant<GameState> for MarksAlternate {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().count(Mark::X);
        let os = state.board().count(Mark::O);
        if xs != os && xs != os + 1 {
            return false;
        }

        let x_is_due = xs == os;
        let expected = match (state.is_over(), x_is_due) {
            (false, true) | (true, false) => Mark::X,
            (false, false) | (true, true) => Mark::O,
        };
        state.current_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
