//! Cursor movement over the scorecard grid
//!
//! The grid is 18 rows (row = hole - 1) by 1 + num_players columns:
//! column 0 is the par column, columns 1..=num_players are the players.
use crate::scorecard::HOLES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Hole number under the cursor (1..=18).
    pub fn hole(&self) -> usize {
        self.row + 1
    }

    /// Player index under the cursor, or None on the par column.
    pub fn player(&self) -> Option<usize> {
        self.col.checked_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Move one cell in the given direction, clamped to the grid. No wraparound.
pub fn step(cursor: Cursor, direction: Direction, num_players: usize) -> Cursor {
    match direction {
        Direction::Up => Cursor {
            row: cursor.row.saturating_sub(1),
            ..cursor
        },
        Direction::Down => Cursor {
            row: (cursor.row + 1).min(HOLES - 1),
            ..cursor
        },
        Direction::Left => Cursor {
            col: cursor.col.saturating_sub(1),
            ..cursor
        },
        Direction::Right => Cursor {
            col: (cursor.col + 1).min(num_players),
            ..cursor
        },
    }
}
