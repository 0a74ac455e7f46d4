//! Keyboard cursor on the board.
//!
//! The cursor is presentation-side state: the engine only ever sees the
//! coordinates it picks. Movement is clamped to the board edges rather than
//! wrapping.

use crate::types::{Coord, GameAction, GRID_SIZE};

/// Clamped board cursor driven by cursor actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Coord,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            pos: Coord::new(0, 0),
        }
    }

    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// Jump to a cell (used when a mouse click lands on the board).
    pub fn set(&mut self, coord: Coord) {
        if coord.in_bounds() {
            self.pos = coord;
        }
    }

    /// Apply a cursor-movement action; other actions are ignored.
    /// Returns true if the cursor moved.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let Coord { row, col } = self.pos;
        let next = match action {
            GameAction::CursorUp if row > 0 => Coord::new(row - 1, col),
            GameAction::CursorDown if row < GRID_SIZE - 1 => Coord::new(row + 1, col),
            GameAction::CursorLeft if col > 0 => Coord::new(row, col - 1),
            GameAction::CursorRight if col < GRID_SIZE - 1 => Coord::new(row, col + 1),
            _ => return false,
        };
        self.pos = next;
        true
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
