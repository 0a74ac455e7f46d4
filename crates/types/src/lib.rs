//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a square grid:
//!
//! - **Size**: 8 rows x 8 columns (indexed 0-7)
//! - **Cells**: 64 total, row-major order
//! - **Symbols**: 6 distinct tile values
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 200 | Pause while matched cells are flagged before clearing |
//! | `REVERT_DELAY_MS` | 200 | Pause before a failed swap is undone |
//!
//! # Scoring
//!
//! A cleared cell is worth `CELL_SCORE` points, multiplied by the 1-based
//! cascade depth of the step that cleared it. A direct swap clearing 3 cells
//! awards 30 points; the same clear arriving as the second cascade step
//! awards 60.
//!
//! # Examples
//!
//! ```
//! use tui_gemswap_types::{Coord, GameAction, Symbol, GRID_SIZE, SYMBOL_COUNT};
//!
//! // Symbols convert to and from their pool index
//! let s = Symbol::from_index(0).unwrap();
//! assert_eq!(s, Symbol::Ruby);
//! assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Symbol::from_str("jade"), Some(Symbol::Jade));
//!
//! // Coordinates know the 4-directional adjacency contract
//! let a = Coord::new(2, 3);
//! assert!(a.is_adjacent(Coord::new(2, 4)));
//! assert!(!a.is_adjacent(Coord::new(3, 4)));
//!
//! // Parse game actions
//! assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
//! assert_eq!(GRID_SIZE, 8);
//! ```

/// Board side length in cells (8 rows, 8 columns)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the board
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of distinct symbols in the pool
pub const SYMBOL_COUNT: usize = 6;

/// Minimum run length that counts as a match
pub const MIN_RUN: usize = 3;

/// Fixed timestep interval in milliseconds (16ms, approximately 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pause while matched cells stay flagged before they are cleared (200ms)
pub const SETTLE_DELAY_MS: u32 = 200;

/// Pause before a swap that produced no match is undone (200ms)
pub const REVERT_DELAY_MS: u32 = 200;

/// Points per cleared cell, before the cascade multiplier
pub const CELL_SCORE: u32 = 10;

/// The six tile symbols
///
/// Each symbol is an opaque, equality-comparable tile value. The variants
/// mirror the six colored pieces of the classic presentation:
/// - **Ruby**: red
/// - **Amber**: yellow
/// - **Jade**: green
/// - **Sapphire**: blue
/// - **Amethyst**: purple
/// - **Topaz**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Ruby,
    Amber,
    Jade,
    Sapphire,
    Amethyst,
    Topaz,
}

impl Symbol {
    /// All symbols in pool order
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::Ruby,
        Symbol::Amber,
        Symbol::Jade,
        Symbol::Sapphire,
        Symbol::Amethyst,
        Symbol::Topaz,
    ];

    /// Index of this symbol within the pool (0-based)
    pub fn index(self) -> usize {
        match self {
            Symbol::Ruby => 0,
            Symbol::Amber => 1,
            Symbol::Jade => 2,
            Symbol::Sapphire => 3,
            Symbol::Amethyst => 4,
            Symbol::Topaz => 5,
        }
    }

    /// Look up a symbol by pool index
    ///
    /// Returns `None` for indices outside `0..SYMBOL_COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a symbol from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(Symbol::Ruby),
            "amber" => Some(Symbol::Amber),
            "jade" => Some(Symbol::Jade),
            "sapphire" => Some(Symbol::Sapphire),
            "amethyst" => Some(Symbol::Amethyst),
            "topaz" => Some(Symbol::Topaz),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Ruby => "ruby",
            Symbol::Amber => "amber",
            Symbol::Jade => "jade",
            Symbol::Sapphire => "sapphire",
            Symbol::Amethyst => "amethyst",
            Symbol::Topaz => "topaz",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty (exists only transiently between clear and refill)
/// - `Some(Symbol)`: cell holding the given symbol
pub type Cell = Option<Symbol>;

/// A board coordinate: (row, column), 0-indexed, bounds `[0, GRID_SIZE)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat row-major index of this coordinate
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.row as usize) * (GRID_SIZE as usize) + (self.col as usize)
    }

    /// Coordinate for a flat row-major index
    ///
    /// Returns `None` for indices outside `0..GRID_CELLS`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= GRID_CELLS {
            return None;
        }
        Some(Self {
            row: (index / GRID_SIZE as usize) as u8,
            col: (index % GRID_SIZE as usize) as u8,
        })
    }

    /// Whether this coordinate lies on the board
    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// 4-directional adjacency: same row and columns differ by exactly one,
    /// or same column and rows differ by exactly one. Diagonals are not
    /// adjacent, and a coordinate is not adjacent to itself.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 0 && dc == 1) || (dr == 1 && dc == 0)
    }
}

/// Game actions that can be applied by the player
///
/// Cursor actions move the keyboard cursor; `Pick` selects the cell under it.
/// Mouse clicks bypass the cursor and pick a cell directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor up one cell
    CursorUp,
    /// Move the board cursor down one cell
    CursorDown,
    /// Move the board cursor left one cell
    CursorLeft,
    /// Move the board cursor right one cell
    CursorRight,
    /// Pick the cell under the cursor (select, deselect, or attempt a swap)
    Pick,
    /// Reset counters and regenerate the board
    NewGame,
    /// Randomly permute the symbols currently on the board
    Shuffle,
}

impl GameAction {
    /// Parse an action from its camelCase name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "pick" => Some(GameAction::Pick),
            "newgame" => Some(GameAction::NewGame),
            "shuffle" => Some(GameAction::Shuffle),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Pick => "pick",
            GameAction::NewGame => "newGame",
            GameAction::Shuffle => "shuffle",
        }
    }
}

/// Engine-side event emitted after each cascade step clears cells.
///
/// Consumed by observers (HUD, renderer flash) via `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearEvent {
    pub cells_cleared: u32,
    /// 1-based depth of the cascade step that produced this clear
    pub cascade_depth: u32,
    pub score_awarded: u32,
}
