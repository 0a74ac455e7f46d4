//! Initial board population
//!
//! Fills the grid in row-major order with local rejection sampling: a
//! candidate symbol is redrawn while it would complete a horizontal run with
//! the two cells to its left or a vertical run with the two cells above.
//! Each axis forbids at most one symbol, so at most 2 of the 6 symbols are
//! ever rejected and the loop terminates quickly.

use arrayvec::ArrayVec;

use tui_gemswap_types::{Coord, Symbol, GRID_SIZE};

use crate::board::Grid;
use crate::rng::SimpleRng;

/// Populate every cell of `grid` so that no row or column contains three
/// consecutive identical symbols.
pub fn fill(grid: &mut Grid, rng: &mut SimpleRng) {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let forbidden = forbidden_symbols(grid, row, col);
            let symbol = loop {
                let candidate = rng.draw_symbol();
                if !forbidden.contains(&candidate) {
                    break candidate;
                }
            };
            grid.set(Coord::new(row, col), Some(symbol));
        }
    }
}

/// Symbols that would complete a run of three at (row, col), given the cells
/// already placed to the left and above.
fn forbidden_symbols(grid: &Grid, row: u8, col: u8) -> ArrayVec<Symbol, 2> {
    let mut forbidden = ArrayVec::new();

    if col >= 2 {
        let left1 = grid.symbol(Coord::new(row, col - 1));
        let left2 = grid.symbol(Coord::new(row, col - 2));
        if let (Some(a), Some(b)) = (left1, left2) {
            if a == b {
                forbidden.push(a);
            }
        }
    }

    if row >= 2 {
        let up1 = grid.symbol(Coord::new(row - 1, col));
        let up2 = grid.symbol(Coord::new(row - 2, col));
        if let (Some(a), Some(b)) = (up1, up2) {
            if a == b && !forbidden.contains(&a) {
                forbidden.push(a);
            }
        }
    }

    forbidden
}
