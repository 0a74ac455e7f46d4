//! Resolver tests - clear, gravity, refill and cascade termination

use tui_gemswap::core::resolver::{apply_gravity, clear_matches, refill, resolve};
use tui_gemswap::core::{find_matches, Grid, MatchMask, SimpleRng};
use tui_gemswap::types::{Coord, Symbol, GRID_SIZE};

/// Build a full grid from one letter per cell ('A'..'F' map to the pool).
fn grid_from_rows(rows: [&str; 8]) -> Grid {
    let mut grid = Grid::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let symbol = Symbol::ALL[(ch as u8 - b'A') as usize];
            grid.set(Coord::new(r as u8, c as u8), Some(symbol));
        }
    }
    grid
}

fn stable_grid() -> Grid {
    grid_from_rows([
        "ABCDEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ])
}

#[test]
fn test_clear_then_gravity_then_refill_restores_fullness() {
    let mut grid = stable_grid();
    let mut mask = MatchMask::EMPTY;
    mask.insert(Coord::new(0, 0));
    mask.insert(Coord::new(1, 0));
    mask.insert(Coord::new(5, 5));

    clear_matches(&mut grid, mask);
    assert_eq!(grid.count_empty(), 3);

    let vacated = apply_gravity(&mut grid);
    assert_eq!(vacated[0], 2);
    assert_eq!(vacated[5], 1);
    // Holes collect at the top of their columns.
    assert_eq!(grid.symbol(Coord::new(0, 0)), None);
    assert_eq!(grid.symbol(Coord::new(1, 0)), None);
    assert_eq!(grid.symbol(Coord::new(0, 5)), None);

    refill(&mut grid, &mut SimpleRng::new(11));
    assert!(grid.is_full());
}

#[test]
fn test_gravity_shifts_column_contents_down() {
    let mut grid = stable_grid();
    // Clear (3, 2); everything above in column 2 drops one row.
    let above = grid.symbol(Coord::new(2, 2));
    let below = grid.symbol(Coord::new(4, 2));

    let mut mask = MatchMask::EMPTY;
    mask.insert(Coord::new(3, 2));
    clear_matches(&mut grid, mask);
    apply_gravity(&mut grid);

    assert_eq!(grid.symbol(Coord::new(3, 2)), above);
    assert_eq!(grid.symbol(Coord::new(4, 2)), below);
    assert_eq!(grid.symbol(Coord::new(0, 2)), None);
}

#[test]
fn test_resolve_clears_crafted_run() {
    let mut grid = stable_grid();
    for col in [2u8, 3, 4] {
        grid.set(Coord::new(6, col), Some(Symbol::Amethyst));
    }
    assert_eq!(find_matches(&grid).len(), 3);

    let mut rng = SimpleRng::new(31);
    let outcome = resolve(&mut grid, &mut rng);

    assert!(outcome.cascades >= 1);
    assert!(outcome.cells_cleared >= 3);
    assert!(grid.is_full());
    assert!(find_matches(&grid).is_empty());
}

#[test]
fn test_resolve_terminates_from_heavily_matched_grid() {
    // A pathological board: every cell the same symbol.
    let mut grid = Grid::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            grid.set(Coord::new(row, col), Some(Symbol::Ruby));
        }
    }

    let mut rng = SimpleRng::new(13);
    let outcome = resolve(&mut grid, &mut rng);

    assert!(outcome.cells_cleared >= 64);
    assert!(grid.is_full());
    assert!(find_matches(&grid).is_empty());
}

#[test]
fn test_resolve_is_deterministic_per_seed() {
    let make = || {
        let mut grid = stable_grid();
        for col in [2u8, 3, 4] {
            grid.set(Coord::new(6, col), Some(Symbol::Amethyst));
        }
        grid
    };

    let mut a = make();
    let mut b = make();
    let out_a = resolve(&mut a, &mut SimpleRng::new(40));
    let out_b = resolve(&mut b, &mut SimpleRng::new(40));

    assert_eq!(out_a, out_b);
    assert_eq!(a, b);
}

#[test]
fn test_resolve_untouched_cells_survive() {
    let mut grid = stable_grid();
    for col in [2u8, 3, 4] {
        grid.set(Coord::new(6, col), Some(Symbol::Amethyst));
    }
    // A far corner untouched by the cascade keeps its symbol.
    let corner = grid.symbol(Coord::new(7, 7));

    resolve(&mut grid, &mut SimpleRng::new(8));
    assert_eq!(grid.symbol(Coord::new(7, 7)), corner);
}
