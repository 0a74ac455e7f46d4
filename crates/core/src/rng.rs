//! RNG module - deterministic engine randomness
//!
//! All randomness in the engine (generation, refills, shuffles) flows through
//! a simple seedable LCG so that a seed fully determines a game. Tests lean on
//! this: the same seed reproduces the same board, the same cascades, the same
//! shuffle order.

use tui_gemswap_types::{Symbol, SYMBOL_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniformly random symbol from the pool
    pub fn draw_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.next_range(SYMBOL_COUNT as u32) as usize]
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (used to re-seed follow-up games)
    pub fn state(&self) -> u32 {
        self.state
    }
}
