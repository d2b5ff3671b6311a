//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timeline_tictactoe::{Coordinates, Position};

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Coordinates { row, column } = cursor.coordinates();

    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(2), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(2)),
        _ => (row, column),
    };

    Coordinates::new(row, column).to_position().unwrap_or(cursor)
}
