//! GameView tests - snapshot projection and click hit-testing

use tui_gemswap::core::{GameState, Grid};
use tui_gemswap::term::{GameView, Viewport};
use tui_gemswap::types::{Coord, Symbol, GRID_SIZE};

fn full_grid_of(symbol: Symbol) -> Grid {
    let mut grid = Grid::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            grid.set(Coord::new(row, col), Some(symbol));
        }
    }
    grid
}

#[test]
fn test_render_reflects_engine_snapshot() {
    let state = GameState::new(77);
    let snapshot = state.snapshot();

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let frame = view.render(&snapshot, None, viewport);

    assert_eq!(frame.width(), 120);
    assert_eq!(frame.height(), 40);

    // Every cell center carries a symbol glyph (the board is full).
    let layout = view.layout(viewport);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let (x, y) = layout.cell_pos(Coord::new(row, col));
            let center = frame
                .get(x + layout.cell_w / 2, y + layout.cell_h / 2)
                .expect("cell center inside frame");
            assert_ne!(center.ch, '·', "cell ({},{}) rendered as empty", row, col);
        }
    }
}

#[test]
fn test_selection_changes_rendering() {
    let mut state = GameState::new(77);
    state.pick(Coord::new(2, 3));
    let snapshot = state.snapshot();
    assert_eq!(snapshot.selection, Some((2, 3)));

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let layout = view.layout(viewport);
    let frame = view.render(&snapshot, None, viewport);

    let (x, y) = layout.cell_pos(Coord::new(2, 3));
    assert_eq!(frame.get(x, y + layout.cell_h / 2).map(|g| g.ch), Some('['));
}

#[test]
fn test_hit_test_matches_layout() {
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let layout = view.layout(viewport);

    for row in [0u8, 3, 7] {
        for col in [0u8, 4, 7] {
            let coord = Coord::new(row, col);
            let (x, y) = layout.cell_pos(coord);
            assert_eq!(view.hit_test(x, y, viewport), Some(coord));
        }
    }

    // Clicks outside the board select nothing.
    assert_eq!(view.hit_test(0, 0, viewport), None);
    assert_eq!(
        view.hit_test(viewport.width - 1, viewport.height - 1, viewport),
        None
    );
}

#[test]
fn test_click_pick_through_hit_test() {
    // End-to-end without a terminal: a "click" resolved by the view lands in
    // the engine as a pick.
    let mut state = GameState::new(5);
    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let layout = view.layout(viewport);

    let (x, y) = layout.cell_pos(Coord::new(4, 4));
    let coord = view.hit_test(x, y, viewport).expect("click lands on board");
    state.pick(coord);
    assert_eq!(state.selection(), Some(Coord::new(4, 4)));
}

#[test]
fn test_uniform_board_renders_uniform_color() {
    let state = GameState::from_grid(full_grid_of(Symbol::Sapphire), 1);
    let snapshot = state.snapshot();

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let layout = view.layout(viewport);
    let frame = view.render(&snapshot, None, viewport);

    let (ax, ay) = layout.cell_pos(Coord::new(0, 0));
    let (bx, by) = layout.cell_pos(Coord::new(7, 7));
    let a = frame.get(ax + 1, ay).expect("in frame");
    let b = frame.get(bx + 1, by).expect("in frame");
    assert_eq!(a.bg, b.bg);
}
