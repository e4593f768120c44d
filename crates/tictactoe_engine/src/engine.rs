//! The game engine: one board, two players, one turn at a time.

use crate::coord::Coord;
use crate::error::{InactiveReason, PlacementError};
use crate::invariants::assert_invariants;
use crate::outcome::{Highlight, Outcome};
use crate::player::{Player, Players};
use crate::rules;
use crate::types::{Board, Cell, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Read-only snapshot of a game, taken with [`GameEngine::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    turn_count: u8,
    is_paused: bool,
    outcome: Outcome,
}

impl GameState {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            turn_count: 0,
            is_paused: false,
            outcome: Outcome::InProgress,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        current_mark: Mark,
        turn_count: u8,
        outcome: Outcome,
    ) -> Self {
        Self {
            board,
            current_mark,
            turn_count,
            is_paused: false,
            outcome,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark of the player to move, or of the last mover once the game is over.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Accepted placements since the last reset.
    pub fn turn_count(&self) -> u8 {
        self.turn_count
    }

    /// Whether placements are blocked by a pause.
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// How a front end should emphasize the cell at `coord`.
    pub fn highlight(&self, coord: Coord) -> Highlight {
        self.outcome.highlight(coord)
    }
}

/// What an accepted placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct PlacementEffect {
    /// Cell that was written.
    coord: Coord,
    /// Mark written to it.
    mark: Mark,
    /// Outcome after the placement.
    outcome: Outcome,
}

/// Status line for the top of the screen.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Banner {
    /// Game in progress; names the player to move.
    #[display("{_0}'s turn")]
    Turn(String),
    /// Game in progress but paused.
    #[display("Game Paused")]
    Paused,
    /// Names the winner.
    #[display("{_0} wins!")]
    Won(String),
    /// Board filled with no line.
    #[display("It's a tie!")]
    Tie,
}

/// Tic-tac-toe game engine.
///
/// The engine does no locking. Callers serialize access, which a UI event
/// loop does naturally; wrap it in a mutex to share it between threads.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Players,
    state: GameState,
}

impl GameEngine {
    /// Creates a game between `players`, X to move.
    #[instrument(skip(players), fields(x = %players.x().name(), o = %players.o().name()))]
    pub fn new(players: Players) -> Self {
        info!("New game");
        Self {
            players,
            state: GameState::initial(),
        }
    }

    /// Creates a game from the first (X) and second (O) player's names.
    pub fn with_names(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(Players::new(first, second))
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// Checks, in order: the game is not paused, the game is not over, the
    /// coordinate is on the board, the cell is empty. On success the turn
    /// counter advances, the outcome is re-evaluated, and the turn passes to
    /// the other player unless the game just ended.
    ///
    /// # Errors
    ///
    /// - [`PlacementError::GameNotActive`] if paused or already won or tied
    /// - [`PlacementError::InvalidCoordinate`] if `row` or `col` exceeds 2
    /// - [`PlacementError::CellOccupied`] if the cell holds a mark
    ///
    /// A rejected placement leaves the engine untouched.
    #[instrument(skip(self), fields(mark = %self.state.current_mark, turn = self.state.turn_count))]
    pub fn place_mark(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<PlacementEffect, PlacementError> {
        let coord = self.check_placement(row, col).inspect_err(|error| {
            warn!(%error, "Placement rejected");
        })?;

        let mark = self.state.current_mark;
        self.state.board.set(coord, Cell::Occupied(mark));
        self.state.turn_count += 1;
        self.state.outcome = rules::evaluate(&self.state.board, self.state.turn_count);

        if self.state.outcome.is_terminal() {
            info!(outcome = %self.state.outcome, board = %self.state.board, "Game over");
        } else {
            self.state.current_mark = mark.opponent();
        }
        debug!(%coord, "Placement accepted");

        assert_invariants(&self.state);
        Ok(PlacementEffect::new(coord, mark, self.state.outcome))
    }

    fn check_placement(&self, row: usize, col: usize) -> Result<Coord, PlacementError> {
        if self.state.is_paused {
            return Err(PlacementError::GameNotActive(InactiveReason::Paused));
        }
        if self.state.outcome.is_terminal() {
            return Err(PlacementError::GameNotActive(InactiveReason::Finished));
        }
        let coord = Coord::new(row, col).ok_or(PlacementError::InvalidCoordinate { row, col })?;
        if !self.state.board.is_empty(coord) {
            return Err(PlacementError::CellOccupied(coord));
        }
        Ok(coord)
    }

    /// Flips the pause flag.
    ///
    /// Always succeeds, including on a finished game, where it has no effect
    /// on play since placements are already refused.
    #[instrument(skip(self))]
    pub fn toggle_pause(&mut self) {
        self.state.is_paused = !self.state.is_paused;
        debug!(paused = self.state.is_paused, "Pause toggled");
    }

    /// Clears the board and hands the first move back to X.
    ///
    /// Players keep their names and marks.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        info!("Game reset");
    }

    /// Returns a snapshot of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        self.players.get(mark)
    }

    /// The player whose mark is [`GameState::current_mark`].
    pub fn current_player(&self) -> &Player {
        self.player(self.state.current_mark)
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<&Player> {
        self.state.outcome.winner().map(|mark| self.player(mark))
    }

    /// Status line for the current state.
    ///
    /// A finished game always shows its result, even while paused.
    pub fn banner(&self) -> Banner {
        match self.state.outcome {
            Outcome::Win { mark, .. } => Banner::Won(self.player(mark).name().clone()),
            Outcome::Tie => Banner::Tie,
            Outcome::InProgress if self.state.is_paused => Banner::Paused,
            Outcome::InProgress => Banner::Turn(self.current_player().name().clone()),
        }
    }
}
