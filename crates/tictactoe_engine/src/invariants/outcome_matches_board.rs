//! Outcome invariant: the recorded outcome is the one the rules give.

use super::Invariant;
use crate::engine::GameState;
use crate::rules;

/// Invariant: the stored outcome equals a fresh evaluation of the board.
///
/// Covers both directions: a game is in progress only while no line is
/// complete and fewer than nine turns were played, and a finished game
/// really has a line or a full board.
pub struct OutcomeMatchesBoard;

impl Invariant<GameState> for OutcomeMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.outcome() == rules::evaluate(state.board(), state.turn_count())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
