//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! keyboard cursor on the board. Mouse clicks are resolved to cells by the
//! rendering layer (which owns the board layout) and fed to the engine
//! directly.

pub mod cursor;
pub mod map;

pub use tui_gemswap_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
