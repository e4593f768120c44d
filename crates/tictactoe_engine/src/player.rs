//! The two people at the board.

use crate::types::Mark;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// A player: a display name and the mark they place.
///
/// Names are taken as given. Rejecting or defaulting blank names is up to
/// whatever collected them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark assigned at game start.
    mark: Mark,
}

impl Player {
    /// Creates a player.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

/// Both players of one game. The first player always holds X.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Players {
    /// Player holding X.
    x: Player,
    /// Player holding O.
    o: Player,
}

impl Players {
    /// Creates the pair from the first and second player's names.
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            x: Player::new(first, Mark::X),
            o: Player::new(second, Mark::O),
        }
    }

    /// Returns the player holding `mark`.
    pub fn get(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}
