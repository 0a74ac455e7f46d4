//! Game state tests - selection, swap outcomes, busy lock and counters

use tui_gemswap::core::{find_matches, GameState, Grid, PickOutcome};
use tui_gemswap::types::{Coord, Symbol, REVERT_DELAY_MS, SETTLE_DELAY_MS};

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

/// Run-free board where swapping (0,1) and (1,1) lines up A A A in row 0.
fn swap_ready_grid() -> Grid {
    grid_from_rows([
        "ABACDEFA", "BADEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ])
}

fn drive_to_idle(state: &mut GameState) {
    let mut guard = 0;
    while state.busy() {
        state.tick(SETTLE_DELAY_MS);
        guard += 1;
        assert!(guard < 100, "engine failed to settle");
    }
}

#[test]
fn test_selecting_then_nonadjacent_moves_selection() {
    let mut state = GameState::from_grid(swap_ready_grid(), 1);

    assert_eq!(state.pick(Coord::new(0, 0)), PickOutcome::Selected);
    // (5,5) is far away: the selection moves, no swap happens.
    assert_eq!(state.pick(Coord::new(5, 5)), PickOutcome::Reselected);
    assert_eq!(state.selection(), Some(Coord::new(5, 5)));
    assert_eq!(state.moves(), 0);
    assert!(!state.busy());
}

#[test]
fn test_diagonal_is_not_adjacent() {
    let mut state = GameState::from_grid(swap_ready_grid(), 1);
    state.pick(Coord::new(3, 3));
    assert_eq!(state.pick(Coord::new(4, 4)), PickOutcome::Reselected);
    assert!(!state.busy());
}

#[test]
fn test_rejected_swap_restores_pre_swap_grid() {
    let grid = swap_ready_grid();
    let mut state = GameState::from_grid(grid.clone(), 1);

    state.pick(Coord::new(6, 0));
    assert_eq!(state.pick(Coord::new(6, 1)), PickOutcome::SwapRejected);
    assert!(state.busy(), "revert delay keeps the engine busy");

    state.tick(REVERT_DELAY_MS);
    assert!(!state.busy());
    assert_eq!(*state.grid(), grid);
    assert_eq!(state.moves(), 0);
}

#[test]
fn test_committed_swap_increments_moves_once() {
    let mut state = GameState::from_grid(swap_ready_grid(), 4242);

    state.pick(Coord::new(0, 1));
    assert_eq!(state.pick(Coord::new(1, 1)), PickOutcome::SwapCommitted);
    assert_eq!(state.moves(), 1);

    drive_to_idle(&mut state);

    // One committed swap is one move, however deep the cascade went.
    assert_eq!(state.moves(), 1);
    assert!(state.score() >= 30);
    assert!(state.grid().is_full());
    assert!(find_matches(state.grid()).is_empty());
}

#[test]
fn test_busy_engine_drops_picks_without_queueing() {
    let mut state = GameState::from_grid(swap_ready_grid(), 7);
    state.pick(Coord::new(0, 1));
    state.pick(Coord::new(1, 1));
    assert!(state.busy());

    // Dropped, not queued: after settling there is no pending selection.
    assert_eq!(state.pick(Coord::new(3, 3)), PickOutcome::Ignored);
    drive_to_idle(&mut state);
    assert_eq!(state.selection(), None);
}

#[test]
fn test_stable_states_uphold_no_run_invariant() {
    let mut state = GameState::new(2024);
    assert!(find_matches(state.grid()).is_empty());

    state.shuffle();
    drive_to_idle(&mut state);
    assert!(find_matches(state.grid()).is_empty());

    state.new_game();
    assert!(find_matches(state.grid()).is_empty());
}

#[test]
fn test_shuffle_keeps_symbol_multiset_when_no_cascade() {
    let mut state = GameState::from_grid(swap_ready_grid(), 50);
    let count = |state: &GameState| {
        let mut counts = [0usize; 6];
        for cell in state.grid().cells() {
            counts[cell.expect("idle board is full").index()] += 1;
        }
        counts
    };
    let before = count(&state);

    assert!(state.shuffle());
    if !state.busy() {
        assert_eq!(count(&state), before);
    }
}

#[test]
fn test_new_game_resets_and_bumps_game_id() {
    let mut state = GameState::from_grid(swap_ready_grid(), 4242);
    state.pick(Coord::new(0, 1));
    state.pick(Coord::new(1, 1));
    drive_to_idle(&mut state);
    assert!(state.score() > 0);

    let old_id = state.game_id();
    state.new_game();
    assert_eq!(state.game_id(), old_id + 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.selection(), None);
    assert!(state.grid().is_full());
}

#[test]
fn test_clear_events_flow_per_cascade_step() {
    let mut state = GameState::from_grid(swap_ready_grid(), 4242);
    state.pick(Coord::new(0, 1));
    state.pick(Coord::new(1, 1));

    let mut depths = Vec::new();
    let mut guard = 0;
    while state.busy() {
        state.tick(SETTLE_DELAY_MS);
        if let Some(event) = state.take_last_event() {
            depths.push(event.cascade_depth);
            assert!(event.cells_cleared >= 3);
            assert!(event.score_awarded >= 30 * event.cascade_depth);
        }
        guard += 1;
        assert!(guard < 100);
    }

    // Depths are 1, 2, 3, ... in order.
    assert!(!depths.is_empty());
    for (i, depth) in depths.iter().enumerate() {
        assert_eq!(*depth, i as u32 + 1);
    }
}

#[test]
fn test_same_seed_same_session() {
    let mut a = GameState::new(31337);
    let mut b = GameState::new(31337);
    assert_eq!(a.grid(), b.grid());

    a.shuffle();
    b.shuffle();
    let mut guard = 0;
    while a.busy() || b.busy() {
        a.tick(SETTLE_DELAY_MS);
        b.tick(SETTLE_DELAY_MS);
        guard += 1;
        assert!(guard < 100);
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.score(), b.score());
}
