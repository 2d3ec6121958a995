//! Game state: one grid and its score.
//!
//! `GameState` is a plain owned value. Independent sessions are independent
//! values; nothing is shared between them. The score can only be raised by
//! the engine, which keeps it monotonically non-decreasing.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::grid::{Grid, Position};

/// A tile placed by a spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub position: Position,
    pub value: u32,
}

/// Grid, score and move counter of one play session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    score: u64,
    moves: u32,
}

impl GameState {
    /// Create an empty board of the given size with score 0.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            score: 0,
            moves: 0,
        })
    }

    /// Resume from caller-held grid data and score.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R], score: u64) -> Result<Self> {
        Ok(Self {
            grid: Grid::from_rows(rows)?,
            score,
            moves: 0,
        })
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// See [`Grid::is_terminal`].
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "-----------------")?;
        write!(f, "{}", self.grid)?;
        writeln!(f, "-----------------")
    }
}
