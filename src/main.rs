//! Terminal match-3 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_gemswap::core::{GameSnapshot, GameState};
use tui_gemswap::input::{handle_key_event, should_quit, Cursor};
use tui_gemswap::term::{GameView, Screen, Viewport};
use tui_gemswap::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = Screen::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed the session from the clock; the engine itself stays deterministic.
fn session_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut Screen) -> Result<()> {
    let mut state = GameState::new(session_seed());
    let view = GameView::default();
    let mut cursor = Cursor::new();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        state.snapshot_into(&mut snapshot);
        let frame = view.render(&snapshot, Some(cursor.pos()), viewport);
        term.present(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::CursorUp
                            | GameAction::CursorDown
                            | GameAction::CursorLeft
                            | GameAction::CursorRight => {
                                cursor.apply(action);
                            }
                            GameAction::Pick => {
                                state.pick(cursor.pos());
                            }
                            GameAction::NewGame => state.new_game(),
                            GameAction::Shuffle => {
                                state.shuffle();
                            }
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some(coord) = view.hit_test(mouse.column, mouse.row, viewport) {
                            cursor.set(coord);
                            state.pick(coord);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.tick(TICK_MS);
        }
    }
}
