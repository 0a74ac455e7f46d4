//! Scoring module - points for cleared cells
//!
//! The original implementation tracked a score it never incremented; here the
//! award is explicit: each cleared cell is worth `CELL_SCORE` points,
//! multiplied by the 1-based depth of the cascade step that cleared it.
//! Cascades triggered by a shuffle use the same rule.

use tui_gemswap_types::CELL_SCORE;

/// Score breakdown for one cascade step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearScore {
    /// Points before the cascade multiplier (`CELL_SCORE * cells`)
    pub base: u32,
    /// Extra points contributed by cascade depth beyond the first step
    pub cascade_bonus: u32,
    pub total: u32,
}

/// Score for clearing `cells` cells at the given 1-based cascade depth.
///
/// Depth 0 is treated as depth 1 so callers cannot zero out an award by
/// accident.
pub fn score_for_clear(cells: u32, cascade_depth: u32) -> ClearScore {
    let base = CELL_SCORE.saturating_mul(cells);
    let depth = cascade_depth.max(1);
    let total = base.saturating_mul(depth);
    ClearScore {
        base,
        cascade_bonus: total - base,
        total,
    }
}
