//! Tic-tac-toe game engine.
//!
//! The engine owns the board, whose turn it is, the turn counter, the pause
//! flag and the outcome. Any front end (terminal, desktop, web page) drives
//! it through three mutating calls and renders the snapshot it returns:
//!
//! - [`GameEngine::place_mark`] - claim a cell for the player to move
//! - [`GameEngine::toggle_pause`] - block or unblock placements
//! - [`GameEngine::reset`] - start over with the same two players
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::with_names("Alice", "Bob");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.place_mark(row, col).expect("legal move");
//! }
//!
//! let state = engine.state();
//! assert!(matches!(state.outcome(), Outcome::Win { mark: Mark::X, .. }));
//! assert_eq!(engine.banner().to_string(), "Alice wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
mod engine;
mod error;
mod outcome;
mod player;
mod types;

pub mod invariants;
pub mod rules;

pub use coord::Coord;
pub use engine::{Banner, GameEngine, GameState, PlacementEffect};
pub use error::{InactiveReason, PlacementError};
pub use outcome::{Highlight, Line, Outcome};
pub use player::{Player, Players};
pub use types::{Board, Cell, Mark};
