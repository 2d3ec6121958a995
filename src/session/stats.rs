//! Session statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected while a session runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Turns started (each `begin_turn` on a live board).
    pub turns: u32,

    /// Moves submitted.
    pub moves: u32,

    /// Moves that changed nothing.
    pub noop_moves: u32,

    /// Total merges across all moves.
    pub merges: u32,

    /// Tiles placed, including the opening spawns.
    pub spawns: u32,

    /// Largest tile seen.
    pub max_tile: u32,
}

impl SessionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of moves that changed nothing.
    #[must_use]
    pub fn noop_ratio(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.noop_moves as f64 / self.moves as f64
        }
    }

    /// Average merges per move.
    #[must_use]
    pub fn merges_per_move(&self) -> f64 {
        if self.moves == 0 {
            0.0
        } else {
            self.merges as f64 / self.moves as f64
        }
    }
}
