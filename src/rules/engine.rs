//! The board engine.
//!
//! `BoardEngine` holds configuration and the random source; game state is
//! passed in explicitly, so one engine can serve any number of independent
//! `GameState` values.
//!
//! ## Example
//!
//! ```
//! use rust_2048::core::{Direction, EngineConfig, GameState, ScriptedSource};
//! use rust_2048::rules::BoardEngine;
//!
//! let config = EngineConfig::default();
//! let mut engine = BoardEngine::with_source(config, ScriptedSource::first_cell(2)).unwrap();
//!
//! let mut state = GameState::from_rows(&[
//!     [0, 0, 0, 0],
//!     [0, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 2, 0, 0],
//! ], 0).unwrap();
//!
//! let outcome = engine.apply_move(&mut state, Direction::Down);
//! assert_eq!(outcome.score_gained, 4);
//! assert_eq!(state.grid().row(3), &[0, 4, 0, 0]);
//!
//! let spawned = engine.spawn(&mut state).unwrap();
//! assert_eq!(spawned.value, 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, EngineConfig, GameRng, GameState, Result, SpawnedTile, TileSource};

use super::slide::shift_grid;

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The direction that was applied.
    pub direction: Direction,
    /// Points added to the score by this move.
    pub score_gained: u64,
    /// Number of merges.
    pub merges: u32,
    /// Whether any tile moved or merged.
    pub changed: bool,
}

/// Applies moves and spawns to game states.
#[derive(Clone, Debug)]
pub struct BoardEngine<R: TileSource = GameRng> {
    config: EngineConfig,
    source: R,
}

impl BoardEngine<GameRng> {
    /// Create an engine with the default ChaCha8 source.
    ///
    /// Uses `config.seed` when set, otherwise seeds from entropy.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(config, rng)
    }
}

impl<R: TileSource> BoardEngine<R> {
    /// Create an engine with an injected random source.
    pub fn with_source(config: EngineConfig, source: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The random source.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Mutable access to the random source.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Start a game: an empty board of the configured size plus the
    /// configured number of initial spawns.
    pub fn new_game(&mut self) -> Result<GameState> {
        let mut state = GameState::new(self.config.size)?;
        for _ in 0..self.config.initial_spawns {
            self.spawn(&mut state);
        }
        tracing::debug!(size = self.config.size, "new game");
        Ok(state)
    }

    /// True when no move can change the board.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> bool {
        let terminal = state.is_terminal();
        if terminal {
            tracing::debug!(score = state.score(), moves = state.moves(), "terminal state");
        }
        terminal
    }

    /// Place a 2 or 4 on a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board when it is full.
    pub fn spawn(&mut self, state: &mut GameState) -> Option<SpawnedTile> {
        let empty = state.grid().empty_cells();
        if empty.is_empty() {
            tracing::debug!("spawn skipped: board full");
            return None;
        }

        let position = empty[self.source.pick_index(empty.len())];
        let value = if self.source.gen_bool(self.config.four_probability) { 4 } else { 2 };
        state.grid_mut().set(position, value);

        tracing::trace!(%position, value, "spawned tile");
        Some(SpawnedTile { position, value })
    }

    /// Slide and merge every line toward `direction`, adding merged values to
    /// the score.
    ///
    /// A move that changes nothing is still applied and counted.
    pub fn apply_move(&self, state: &mut GameState, direction: Direction) -> MoveOutcome {
        let summary = shift_grid(state.grid_mut(), direction);
        state.add_score(summary.score);
        state.record_move();

        tracing::trace!(
            %direction,
            score_gained = summary.score,
            merges = summary.merges,
            changed = summary.changed,
            "applied move"
        );

        MoveOutcome {
            direction,
            score_gained: summary.score,
            merges: summary.merges,
            changed: summary.changed,
        }
    }

    /// Parse a textual direction and apply it.
    ///
    /// On an unrecognized token the state is left untouched.
    pub fn apply_token(&self, state: &mut GameState, token: &str) -> Result<MoveOutcome> {
        let direction = token.parse::<Direction>()?;
        Ok(self.apply_move(state, direction))
    }

    /// Directions that would change the board, in [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                let mut trial = state.grid().clone();
                shift_grid(&mut trial, dir).changed
            })
            .collect()
    }
}
