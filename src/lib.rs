//! # rust-2048
//!
//! A deterministic engine for the tile-sliding 2048 puzzle.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: A `GameState` is a plain value passed to every
//!    operation. There is no global board; independent sessions never
//!    interfere.
//!
//! 2. **Injectable Randomness**: Spawning draws from a `TileSource`. The
//!    default `GameRng` is seeded from entropy; tests inject a seed or a
//!    scripted sequence for exact replay.
//!
//! 3. **Closed Directions**: Moves take a `Direction` enum. Text is parsed at
//!    the edge and rejected with `EngineError::InvalidDirection`.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, state, configuration, RNG, errors
//! - `rules`: Slide-and-merge rule and the `BoardEngine`
//! - `session`: Turn driver with spawn policy, history and statistics

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, EngineError, GameRng, GameState, Grid, Position,
    ScriptedSource, SpawnPolicy, SpawnedTile, TileSource,
};

pub use crate::rules::{BoardEngine, MoveOutcome};

pub use crate::session::{
    MoveRecord, MoveSource, RandomMoves, ScriptedMoves, Session, SessionEnd, SessionStats,
    SessionSummary, TurnStatus,
};
