//! Turn count invariant: one turn per marked cell.

use super::Invariant;
use crate::engine::GameState;

/// Invariant: the turn counter equals the number of non-empty cells.
pub struct TurnCountMatchesBoard;

impl Invariant<GameState> for TurnCountMatchesBoard {
    fn holds(state: &GameState) -> bool {
        usize::from(state.turn_count()) == state.board().occupied()
    }

    fn description() -> &'static str {
        "Turn count equals the number of marked cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Coord, Mark, Outcome};

    #[test]
    fn test_empty_board_zero_turns_holds() {
        let state = GameState::from_parts(Board::new(), Mark::X, 0, Outcome::InProgress);
        assert!(TurnCountMatchesBoard::holds(&state));
    }

    #[test]
    fn test_counter_ahead_of_board_fails() {
        let mut board = Board::new();
        board.set(Coord::CENTER, Cell::Occupied(Mark::X));
        let state = GameState::from_parts(board, Mark::O, 2, Outcome::InProgress);
        assert!(!TurnCountMatchesBoard::holds(&state));
    }
}
