//! Application state and logic.
//!
//! The app never stores gameplay itself: everything about the board comes
//! from the engine. It only tracks which screen is up, the cursor, and the
//! last rejected move.

use super::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{Coord, GameEngine, Mark, Players};
use tracing::{debug, info, instrument};

/// Uses `input` as a player name unless it is blank.
pub fn resolve_name(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Name entry for one player.
#[derive(Debug, Clone)]
pub struct NamePrompt {
    mark: Mark,
    input: String,
    default: String,
    /// Still showing the untouched default; the first edit replaces it.
    pristine: bool,
}

impl NamePrompt {
    fn new(mark: Mark, default: &str) -> Self {
        Self {
            mark,
            input: default.to_string(),
            default: default.to_string(),
            pristine: true,
        }
    }

    /// Mark the player being named will hold.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Text typed so far (prefilled with the default).
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns true while the prefilled default has not been edited.
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    fn push(&mut self, c: char) {
        if self.pristine {
            self.input.clear();
            self.pristine = false;
        }
        self.input.push(c);
    }

    fn backspace(&mut self) {
        if self.pristine {
            self.input.clear();
            self.pristine = false;
        } else {
            self.input.pop();
        }
    }

    /// Prompt line, e.g. `Enter Player 1 Name:`.
    pub fn label(&self) -> String {
        let number = match self.mark {
            Mark::X => 1,
            Mark::O => 2,
        };
        format!("Enter Player {} Name:", number)
    }

    fn name(&self) -> String {
        resolve_name(&self.input, &self.default)
    }
}

/// A game being played.
#[derive(Debug, Clone)]
pub struct Match {
    engine: GameEngine,
    cursor: Coord,
    hint: Option<String>,
}

impl Match {
    fn new(players: Players) -> Self {
        Self {
            engine: GameEngine::new(players),
            cursor: Coord::CENTER,
            hint: None,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Why the last placement was refused, until the next accepted action.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn place(&mut self, coord: Coord) {
        self.cursor = coord;
        match self.engine.place_mark(coord.row(), coord.col()) {
            Ok(effect) => {
                debug!(coord = %effect.coord(), outcome = %effect.outcome(), "Mark placed");
                self.hint = None;
            }
            Err(e) => self.hint = Some(e.to_string()),
        }
    }
}

/// Which screen is showing.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Collecting a player's name.
    Naming(NamePrompt),
    /// Playing.
    Playing(Match),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    first_name: Option<String>,
    second_name: Option<String>,
    second_default: String,
    should_quit: bool,
}

impl App {
    /// Creates the app.
    ///
    /// A `Some` name skips that player's prompt; the defaults prefill the
    /// prompts that remain.
    #[instrument(skip_all)]
    pub fn new(
        first_name: Option<String>,
        second_name: Option<String>,
        first_default: &str,
        second_default: &str,
    ) -> Self {
        let mut app = Self {
            screen: Screen::Naming(NamePrompt::new(Mark::X, first_default)),
            first_name: first_name.map(|name| resolve_name(&name, first_default)),
            second_name: second_name.map(|name| resolve_name(&name, second_default)),
            second_default: second_default.to_string(),
            should_quit: false,
        };
        app.advance();
        app
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns true once the player asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match &mut self.screen {
            Screen::Naming(prompt) => match key {
                KeyCode::Char(c) => prompt.push(c),
                KeyCode::Backspace => prompt.backspace(),
                KeyCode::Enter => {
                    let name = prompt.name();
                    match prompt.mark {
                        Mark::X => self.first_name = Some(name),
                        Mark::O => self.second_name = Some(name),
                    }
                    self.advance();
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing(game) => {
                let Some(action) = action_for(key) else {
                    return;
                };
                debug!(?action, "Handling action");
                match action {
                    Action::Cursor(direction) => game.cursor = move_cursor(game.cursor, direction),
                    Action::PlaceAtCursor => {
                        let cursor = game.cursor;
                        game.place(cursor);
                    }
                    Action::PlaceAt(coord) => game.place(coord),
                    Action::TogglePause => {
                        game.engine.toggle_pause();
                        game.hint = None;
                    }
                    Action::Restart => {
                        game.engine.reset();
                        game.hint = None;
                    }
                    Action::Exit => self.should_quit = true,
                }
            }
        }
    }

    /// Moves to the next missing name, or starts the game once both are known.
    fn advance(&mut self) {
        match (&self.first_name, &self.second_name) {
            (None, _) => {}
            (Some(_), None) => {
                self.screen = Screen::Naming(NamePrompt::new(Mark::O, &self.second_default));
            }
            (Some(first), Some(second)) => {
                info!(x = %first, o = %second, "Starting game");
                let players = Players::new(first.clone(), second.clone());
                self.screen = Screen::Playing(Match::new(players));
            }
        }
    }
}
