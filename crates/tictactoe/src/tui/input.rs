//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_engine::Coord;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a keypad cell (1-9).
    PlaceAt(Coord),
    /// Pause or resume.
    TogglePause,
    /// Clear the board.
    Restart,
    /// Leave the program.
    Exit,
}

/// Maps a key to a play action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            c.to_digit(10).and_then(Coord::from_keypad).map(Action::PlaceAt)
        }
        KeyCode::Char('p' | 'P') => Some(Action::TogglePause),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Exit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Coord, direction: Direction) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|row| (row, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|col| (row, col)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(row, col)| Coord::new(row, col))
        .unwrap_or(cursor)
}
