//! Turn-by-turn session driver.
//!
//! Packages the play loop (terminal check, spawn, render, read a move,
//! apply it) so an interactive front end only has to do I/O.

mod driver;
mod source;
mod stats;

pub use driver::{MoveRecord, Session, SessionEnd, SessionSummary, TurnStatus};
pub use source::{MoveSource, RandomMoves, ScriptedMoves};
pub use stats::SessionStats;
