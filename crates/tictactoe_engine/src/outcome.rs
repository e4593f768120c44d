//! Game outcomes and the lines that decide them.

use crate::coord::Coord;
use crate::types::Mark;
use serde::Serialize;

/// Three cells in a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Coord; 3]);

impl Line {
    pub(crate) const fn new(coords: [Coord; 3]) -> Self {
        Self(coords)
    }

    /// The three coordinates, in board order.
    pub fn coords(&self) -> &[Coord; 3] {
        &self.0
    }

    /// Checks if `coord` is one of the three cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Outcome {
    /// Placements are still possible.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{mark} wins")]
    Win {
        /// Mark that filled the line.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// All nine cells are filled and no line is complete.
    #[display("tie")]
    Tie,
}

impl Outcome {
    /// Returns true once the game is won or tied.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if there is one.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// How a front end should emphasize a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Normal rendering.
    None,
    /// Cell belongs to the winning line.
    Winning,
    /// Game ended in a tie; every cell is marked this way.
    Tie,
}

impl Outcome {
    /// Highlight for `coord` under this outcome.
    pub fn highlight(&self, coord: Coord) -> Highlight {
        match self {
            Outcome::Win { line, .. } if line.contains(coord) => Highlight::Winning,
            Outcome::Tie => Highlight::Tie,
            _ => Highlight::None,
        }
    }
}
