//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the board rules, state management, and cascade
//! logic. It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards, refills and shuffles
//! - **Testable**: Time is injected through `tick`, so tests never wait on real timers
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for match scanning and cascade steps
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with bounds-checked access, swaps and stable gravity compaction
//! - [`generator`]: initial population with the no-latent-run invariant
//! - [`matcher`]: row/column run detection into a 64-bit coordinate mask
//! - [`resolver`]: clear / gravity / refill primitives and the loop-until-stable driver
//! - [`scoring`]: points per cleared cell with cascade multipliers
//! - [`game_state`]: selection, swap validation and the busy phase machine
//! - [`rng`]: seedable LCG driving all engine randomness
//! - [`snapshot`]: flat observer projection for renderers and HUDs
//!
//! # Game Rules
//!
//! - **Swap**: two orthogonally adjacent cells may swap; the swap commits only
//!   if it lines up a run of three or more identical symbols, otherwise it is
//!   undone after a short delay
//! - **Cascade**: cleared cells empty, columns compact downward, fresh symbols
//!   refill from the top, and any new runs clear again until the board is stable
//! - **Busy lock**: picks arriving during a cascade or revert are dropped
//! - **Shuffle**: permutes the symbols on the board; induced runs resolve
//!   through the normal cascade
//!
//! # Example
//!
//! ```
//! use tui_gemswap_core::GameState;
//! use tui_gemswap_types::{Coord, SETTLE_DELAY_MS};
//!
//! // Create a game; the board is full and run-free.
//! let mut game = GameState::new(12345);
//! assert!(!game.busy());
//!
//! // Pick two cells; drive any resulting cascade with ticks.
//! game.pick(Coord::new(0, 0));
//! game.pick(Coord::new(0, 1));
//! while game.busy() {
//!     game.tick(SETTLE_DELAY_MS);
//! }
//! ```

pub mod board;
pub mod game_state;
pub mod generator;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_gemswap_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use game_state::{GameState, Phase, PickOutcome};
pub use matcher::{find_matches, MatchMask};
pub use resolver::{resolve, ResolveOutcome};
pub use rng::SimpleRng;
pub use scoring::{score_for_clear, ClearScore};
pub use snapshot::GameSnapshot;
