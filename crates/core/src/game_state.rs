//! Game state module - selection, swap validation and the cascade phase machine
//!
//! This module ties together all core components: grid, generator, matcher,
//! resolver and scoring. It owns the selection, the move/score counters and
//! the phase machine that serializes cascades against player input.
//!
//! Time is injected: the engine never reads a wall clock. Callers drive the
//! settle and revert delays by calling [`GameState::tick`] with elapsed
//! milliseconds, so tests advance time deterministically.

use tui_gemswap_types::{ClearEvent, Coord, REVERT_DELAY_MS, SETTLE_DELAY_MS};

use crate::board::Grid;
use crate::generator;
use crate::matcher::{find_matches, MatchMask};
use crate::resolver;
use crate::rng::SimpleRng;
use crate::scoring::score_for_clear;
use crate::snapshot::GameSnapshot;

/// Engine phase. Any phase other than `Idle` means the engine is busy and
/// picks are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting picks
    Idle,
    /// Matched cells are flagged for the settle delay, then cleared,
    /// collapsed, refilled and re-scanned
    Clearing {
        pending: MatchMask,
        timer_ms: u32,
        /// 1-based depth of this cascade step
        cascade_depth: u32,
    },
    /// A swap that produced no match stays visible until the delay runs out,
    /// then is undone
    Reverting { a: Coord, b: Coord, timer_ms: u32 },
}

/// Result of a pick, for callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Dropped: the engine is busy (or the coordinate is off the board)
    Ignored,
    /// First pick of a pending swap
    Selected,
    /// Same cell picked again; selection cleared
    Deselected,
    /// Non-adjacent cell picked; selection moved, no swap attempted
    Reselected,
    /// Adjacent swap produced no match; it will be undone after the revert
    /// delay and the move counter is untouched
    SwapRejected,
    /// Adjacent swap produced a match; the move counter incremented and the
    /// clearing cascade started
    SwapCommitted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: SimpleRng,
    /// Seed the current game started from
    seed: u32,
    phase: Phase,
    selection: Option<Coord>,
    score: u32,
    moves: u32,
    /// Monotonic id, increments on every new game
    game_id: u32,
    /// Last cascade-step clear (consumed by observers)
    last_event: Option<ClearEvent>,
}

impl GameState {
    /// Create a game with a freshly generated board
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut grid = Grid::new();
        generator::fill(&mut grid, &mut rng);
        Self {
            grid,
            rng,
            seed,
            phase: Phase::Idle,
            selection: None,
            score: 0,
            moves: 0,
            game_id: 0,
            last_event: None,
        }
    }

    /// Create a game over a prepared grid (scenario setup and tests).
    ///
    /// The grid is taken as-is; refills and shuffles draw from `seed`.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        Self {
            grid,
            rng: SimpleRng::new(seed),
            seed,
            phase: Phase::Idle,
            selection: None,
            score: 0,
            moves: 0,
            game_id: 0,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a clearing cascade or a revert is in flight
    pub fn busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Cells currently flagged for clearing (empty mask outside `Clearing`)
    pub fn clearing_mask(&self) -> MatchMask {
        match self.phase {
            Phase::Clearing { pending, .. } => pending,
            _ => MatchMask::EMPTY,
        }
    }

    /// Reset counters and selection, regenerate the board, bump the game id.
    ///
    /// The new board is seeded from the current RNG state so consecutive
    /// games differ while the whole session stays reproducible.
    pub fn new_game(&mut self) {
        self.seed = self.rng.state();
        generator::fill(&mut self.grid, &mut self.rng);
        self.phase = Phase::Idle;
        self.selection = None;
        self.score = 0;
        self.moves = 0;
        self.last_event = None;
        self.game_id = self.game_id.wrapping_add(1);
    }

    /// Handle a cell pick.
    ///
    /// Implements the selection state machine: select on first pick, deselect
    /// on re-pick, move the selection on a non-adjacent pick, and attempt a
    /// swap on an adjacent pick. Picks are dropped while busy.
    pub fn pick(&mut self, coord: Coord) -> PickOutcome {
        if self.busy() || !coord.in_bounds() {
            return PickOutcome::Ignored;
        }

        let Some(selected) = self.selection else {
            self.selection = Some(coord);
            return PickOutcome::Selected;
        };

        if selected == coord {
            self.selection = None;
            return PickOutcome::Deselected;
        }

        if !selected.is_adjacent(coord) {
            self.selection = Some(coord);
            return PickOutcome::Reselected;
        }

        // Adjacent: tentatively swap, then look for a match.
        self.selection = None;
        self.grid.swap(selected, coord);
        let mask = find_matches(&self.grid);

        if mask.is_empty() {
            self.phase = Phase::Reverting {
                a: selected,
                b: coord,
                timer_ms: REVERT_DELAY_MS,
            };
            PickOutcome::SwapRejected
        } else {
            self.moves += 1;
            self.phase = Phase::Clearing {
                pending: mask,
                timer_ms: SETTLE_DELAY_MS,
                cascade_depth: 1,
            };
            PickOutcome::SwapCommitted
        }
    }

    /// Randomly permute the symbols currently on the board.
    ///
    /// Values are preserved, positions are shuffled (Fisher-Yates). A shuffle
    /// that lines up immediate runs enters the normal clearing cascade, so an
    /// idle board never holds a match; the move counter is untouched either
    /// way. Returns false (no-op) while busy.
    pub fn shuffle(&mut self) -> bool {
        if self.busy() {
            return false;
        }
        self.selection = None;
        self.rng.shuffle(self.grid.cells_mut());

        let mask = find_matches(&self.grid);
        if !mask.is_empty() {
            self.phase = Phase::Clearing {
                pending: mask,
                timer_ms: SETTLE_DELAY_MS,
                cascade_depth: 1,
            };
        }
        true
    }

    /// Advance phase timers by `elapsed_ms`.
    ///
    /// Returns true when the board mutated (a clear committed or a revert
    /// completed). Idle ticks are free.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::Reverting { a, b, timer_ms } => {
                if timer_ms > elapsed_ms {
                    self.phase = Phase::Reverting {
                        a,
                        b,
                        timer_ms: timer_ms - elapsed_ms,
                    };
                    false
                } else {
                    self.grid.swap(a, b);
                    self.phase = Phase::Idle;
                    true
                }
            }
            Phase::Clearing {
                pending,
                timer_ms,
                cascade_depth,
            } => {
                if timer_ms > elapsed_ms {
                    self.phase = Phase::Clearing {
                        pending,
                        timer_ms: timer_ms - elapsed_ms,
                        cascade_depth,
                    };
                    false
                } else {
                    self.commit_clear(pending, cascade_depth);
                    true
                }
            }
        }
    }

    /// Run one clear/drop/refill round and re-scan for the next cascade step.
    fn commit_clear(&mut self, pending: MatchMask, cascade_depth: u32) {
        let cells = pending.len() as u32;
        let award = score_for_clear(cells, cascade_depth);
        self.score = self.score.saturating_add(award.total);
        self.last_event = Some(ClearEvent {
            cells_cleared: cells,
            cascade_depth,
            score_awarded: award.total,
        });

        resolver::clear_matches(&mut self.grid, pending);
        resolver::apply_gravity(&mut self.grid);
        resolver::refill(&mut self.grid, &mut self.rng);

        let next = find_matches(&self.grid);
        self.phase = if next.is_empty() {
            Phase::Idle
        } else {
            Phase::Clearing {
                pending: next,
                timer_ms: SETTLE_DELAY_MS,
                cascade_depth: cascade_depth + 1,
            }
        };
    }

    /// Take and clear the last cascade-step event
    pub fn take_last_event(&mut self) -> Option<ClearEvent> {
        self.last_event.take()
    }

    /// Write the observer snapshot into `out` without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.selection = self.selection.map(|c| (c.row, c.col));
        out.clearing = self.clearing_mask().bits();
        out.busy = self.busy();
        out.score = self.score;
        out.moves = self.moves;
        out.game_id = self.game_id;
        out.seed = self.seed;
        out.phase_timer_ms = match self.phase {
            Phase::Idle => 0,
            Phase::Clearing { timer_ms, .. } | Phase::Reverting { timer_ms, .. } => timer_ms,
        };
        out.cascade_depth = match self.phase {
            Phase::Clearing { cascade_depth, .. } => cascade_depth,
            _ => 0,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
