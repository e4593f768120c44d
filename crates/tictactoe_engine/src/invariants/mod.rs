//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! engine hands out. They are checked after each mutation in debug builds
//! and can be tested independently.

mod alternating_marks;
mod outcome_matches_board;
mod turn_count;

pub use alternating_marks::MarksAlternate;
pub use outcome_matches_board::OutcomeMatchesBoard;
pub use turn_count::TurnCountMatchesBoard;

use crate::engine::GameState;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of a game snapshot.
pub type GameInvariants = (TurnCountMatchesBoard, OutcomeMatchesBoard, MarksAlternate);

/// Checks [`GameInvariants`] in debug builds; panics on violation.
pub(crate) fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        for violation in &violations {
            error!(%violation, "Engine state corrupted");
        }
        panic!("{} invariant(s) violated: {violations:?}", violations.len());
    }
}
