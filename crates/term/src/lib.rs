//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple glyph framebuffer that is flushed to a terminal backend with
//! row-span diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from engine snapshots only (the view never touches engine internals)
//! - Map mouse clicks back to board cells via the same layout math

pub mod fb;
pub mod game_view;
pub mod screen;

pub use fb::{Frame, Glyph, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use screen::Screen;
