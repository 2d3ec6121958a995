//! Move rules and the board engine.
//!
//! - `slide`: the per-line slide-and-merge rule shared by all directions
//! - `engine`: `BoardEngine`, which applies moves, spawns tiles and detects
//!   terminal states on an explicitly passed `GameState`

pub mod engine;
mod slide;

pub use engine::{BoardEngine, MoveOutcome};
