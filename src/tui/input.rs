//! Decoding of terminal events and cursor movement for keyboard navigation.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use rewind_tictactoe::Position;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// A user gesture, independent of which element it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Left mouse button pressed at a terminal cell.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Move focus to the next control group.
    FocusNext,
    /// Move focus to the previous control group.
    FocusPrev,
    /// Move focus within the focused group.
    Move(Arrow),
    /// Activate the focused control.
    Activate,
    /// Leave the application.
    Quit,
}

/// Maps a terminal event to an [`Input`], ignoring everything else.
pub fn decode(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<Input> {
    // crossterm reports releases on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Tab => Some(Input::FocusNext),
        KeyCode::BackTab => Some(Input::FocusPrev),
        KeyCode::Up => Some(Input::Move(Arrow::Up)),
        KeyCode::Down => Some(Input::Move(Arrow::Down)),
        KeyCode::Left => Some(Input::Move(Arrow::Left)),
        KeyCode::Right => Some(Input::Move(Arrow::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Activate),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Quit),
        _ => None,
    }
}

/// Moves the board cursor one cell, staying put at the edges.
pub fn move_cursor(cursor: Position, arrow: Arrow) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match arrow {
        Arrow::Up => (row.saturating_sub(1), col),
        Arrow::Down => (row + 1, col),
        Arrow::Left => (row, col.saturating_sub(1)),
        Arrow::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves a list selection one row, clamped to `len` rows.
pub fn move_row(row: usize, arrow: Arrow, len: usize) -> usize {
    match arrow {
        Arrow::Up => row.saturating_sub(1),
        Arrow::Down => (row + 1).min(len.saturating_sub(1)),
        Arrow::Left | Arrow::Right => row,
    }
}
