//! Cascade resolution - clear, gravity, refill, re-scan
//!
//! The primitives here are the mutation steps of a cascade. The interactive
//! path (`GameState::tick`) runs them one settle-delay apart; [`resolve`] is
//! the synchronous driver that loops until the board is stable, used by tests
//! and benchmarks.
//!
//! Refill draws unconstrained random symbols, so a refill may itself create
//! new runs. That is intended: it is what produces cascades.

use arrayvec::ArrayVec;

use tui_gemswap_types::GRID_SIZE;

use crate::board::Grid;
use crate::matcher::{find_matches, MatchMask};
use crate::rng::SimpleRng;

const SIDE: usize = GRID_SIZE as usize;

/// Outcome of a full synchronous resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOutcome {
    /// Number of clear/drop/refill rounds until the board stabilized
    pub cascades: u32,
    /// Total cells cleared across all rounds
    pub cells_cleared: u32,
}

/// Mark every matched cell empty
pub fn clear_matches(grid: &mut Grid, mask: MatchMask) {
    for coord in mask.iter() {
        grid.set(coord, None);
    }
}

/// Compact each column downward (stable), returning vacated counts per column
pub fn apply_gravity(grid: &mut Grid) -> ArrayVec<u8, SIDE> {
    grid.collapse_columns()
}

/// Fill every empty cell with a fresh random symbol
///
/// After gravity the empties sit at the top of their columns; no run
/// constraint is applied here.
pub fn refill(grid: &mut Grid, rng: &mut SimpleRng) {
    for index in 0..grid.cells().len() {
        if grid.cells()[index].is_none() {
            grid.cells_mut()[index] = Some(rng.draw_symbol());
        }
    }
}

/// Repeatedly clear, drop and refill until no matches remain.
///
/// Terminates because every round either clears cells or finds none; the
/// board is finite and a six-symbol pool makes unbounded cascades
/// stochastically negligible. No iteration cap is needed for correctness.
pub fn resolve(grid: &mut Grid, rng: &mut SimpleRng) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();
    loop {
        let mask = find_matches(grid);
        if mask.is_empty() {
            break;
        }
        outcome.cascades += 1;
        outcome.cells_cleared += mask.len() as u32;

        clear_matches(grid, mask);
        apply_gravity(grid);
        refill(grid, rng);
    }
    outcome
}
