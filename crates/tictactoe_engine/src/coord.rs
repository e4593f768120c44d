//! Board coordinates.

use serde::Serialize;
use tracing::instrument;

/// A validated (row, col) address on the 3x3 board.
///
/// Rows run top to bottom and columns left to right, both in `0..=2`.
/// A `Coord` can only be built through [`Coord::new`] or the named
/// constants, so holding one means the address is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Top-left (keypad 1).
    pub const TOP_LEFT: Coord = Coord::at(0, 0);
    /// Top-center (keypad 2).
    pub const TOP_CENTER: Coord = Coord::at(0, 1);
    /// Top-right (keypad 3).
    pub const TOP_RIGHT: Coord = Coord::at(0, 2);
    /// Middle-left (keypad 4).
    pub const MIDDLE_LEFT: Coord = Coord::at(1, 0);
    /// Center (keypad 5).
    pub const CENTER: Coord = Coord::at(1, 1);
    /// Middle-right (keypad 6).
    pub const MIDDLE_RIGHT: Coord = Coord::at(1, 2);
    /// Bottom-left (keypad 7).
    pub const BOTTOM_LEFT: Coord = Coord::at(2, 0);
    /// Bottom-center (keypad 8).
    pub const BOTTOM_CENTER: Coord = Coord::at(2, 1);
    /// Bottom-right (keypad 9).
    pub const BOTTOM_RIGHT: Coord = Coord::at(2, 2);

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::TOP_LEFT,
        Coord::TOP_CENTER,
        Coord::TOP_RIGHT,
        Coord::MIDDLE_LEFT,
        Coord::CENTER,
        Coord::MIDDLE_RIGHT,
        Coord::BOTTOM_LEFT,
        Coord::BOTTOM_CENTER,
        Coord::BOTTOM_RIGHT,
    ];

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, or `None` if it falls outside the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < Self::SIZE && col < Self::SIZE).then_some(Self::at(row, col))
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a coordinate from a keypad number (1-9, row-major).
    #[instrument]
    pub fn from_keypad(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::from_index(index)
    }

    /// Row, counted from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, counted from the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIZE + self.col
    }

    /// Keypad number (1-9) for this cell.
    pub fn keypad(self) -> usize {
        self.index() + 1
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
