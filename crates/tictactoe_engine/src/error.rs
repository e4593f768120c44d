//! Placement errors.

use crate::coord::Coord;
use serde::Serialize;

/// Why the game is not accepting placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum InactiveReason {
    /// The game is paused.
    #[display("game is paused")]
    Paused,
    /// The game has been won or tied.
    #[display("game is over")]
    Finished,
}

/// A rejected placement. The engine state is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum PlacementError {
    /// Row or column outside `0..=2`.
    #[display("({row}, {col}) is not on the board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("{_0} is already taken")]
    CellOccupied(Coord),

    /// The game is paused or already over.
    #[display("No moves allowed: {_0}")]
    GameNotActive(InactiveReason),
}

impl std::error::Error for PlacementError {}
