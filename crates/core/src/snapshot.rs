use tui_gemswap_types::GRID_SIZE;

const SIDE: usize = GRID_SIZE as usize;

/// Flat, copyable projection of the engine for observers (renderer, HUD).
///
/// Board cells are `0` for empty or `symbol index + 1`. The clearing mask
/// uses the same bit layout as `MatchMask` (bit = row * 8 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; SIDE]; SIDE],
    pub selection: Option<(u8, u8)>,
    pub clearing: u64,
    pub busy: bool,
    pub score: u32,
    pub moves: u32,
    pub game_id: u32,
    pub seed: u32,
    /// Remaining milliseconds of the current settle or revert phase
    pub phase_timer_ms: u32,
    /// 1-based depth of the in-flight cascade step, 0 when idle
    pub cascade_depth: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; SIDE]; SIDE];
        self.selection = None;
        self.clearing = 0;
        self.busy = false;
        self.score = 0;
        self.moves = 0;
        self.game_id = 0;
        self.seed = 0;
        self.phase_timer_ms = 0;
        self.cascade_depth = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; SIDE]; SIDE],
            selection: None,
            clearing: 0,
            busy: false,
            score: 0,
            moves: 0,
            game_id: 0,
            seed: 0,
            phase_timer_ms: 0,
            cascade_depth: 0,
        }
    }
}
