//! Core types: grid, directions, state, configuration, randomness, errors.
//!
//! Nothing here knows the rules of a move; those live in `rules`.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, SpawnPolicy};
pub use direction::Direction;
pub use error::{EngineError, Result};
pub use grid::{is_tile_value, merged_value, Grid, Position, MAX_TILE};
pub use rng::{GameRng, ScriptedSource, TileSource};
pub use state::{GameState, SpawnedTile};
