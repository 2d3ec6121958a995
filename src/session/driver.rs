//! Turn driver for one play session.
//!
//! A front end runs the classic loop against [`Session`]:
//!
//! 1. `begin_turn()`: stop on `Finished`, otherwise a tile is spawned
//!    according to the configured `SpawnPolicy`
//! 2. render `state()`
//! 3. read input and call `submit` or `submit_token`
//!
//! ```
//! use rust_2048::core::{Direction, EngineConfig};
//! use rust_2048::rules::BoardEngine;
//! use rust_2048::session::{Session, TurnStatus};
//!
//! let engine = BoardEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let mut session = Session::new(engine).unwrap();
//!
//! if session.begin_turn() == TurnStatus::AwaitingMove {
//!     session.submit(Direction::Left);
//! }
//! assert_eq!(session.history().len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameRng, GameState, Result, SpawnPolicy, SpawnedTile, TileSource};
use crate::rules::{BoardEngine, MoveOutcome};

use super::source::MoveSource;
use super::stats::SessionStats;

/// State of the loop after `begin_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// No move can change the board.
    Finished { score: u64 },
    /// Waiting for the player's move.
    AwaitingMove,
}

/// One submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub turn: u32,
    /// Direction played.
    pub direction: Direction,
    /// Whether the move changed the grid.
    pub changed: bool,
    /// Points earned by the move.
    pub score_gained: u64,
    /// Tile spawned at the start of the turn this move answered.
    pub spawned: Option<SpawnedTile>,
}

/// Why `Session::run` stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// Terminal board.
    Terminal,
    /// The move cap was reached.
    MoveLimit,
    /// The move source stopped supplying moves.
    Abandoned,
}

/// Final numbers of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u64,
    pub moves: u32,
    pub max_tile: u32,
}

/// A single game driven turn by turn.
pub struct Session<R: TileSource = GameRng> {
    engine: BoardEngine<R>,
    state: GameState,
    history: Vec<MoveRecord>,
    stats: SessionStats,
    /// Grid changed since the last spawn (used by `SpawnPolicy::OnChange`).
    needs_spawn: bool,
    /// Spawn of the current turn, attached to the next move record.
    turn_spawn: Option<SpawnedTile>,
    finished: bool,
}

impl<R: TileSource> Session<R> {
    /// Start a fresh game with the engine's opening spawns.
    pub fn new(mut engine: BoardEngine<R>) -> Result<Self> {
        let state = engine.new_game()?;
        let opening = (state.size() * state.size() - state.grid().count_empty()) as u32;
        let mut session = Self::from_state(engine, state);
        session.stats.spawns = opening;
        Ok(session)
    }

    /// Continue from an existing state.
    #[must_use]
    pub fn from_state(engine: BoardEngine<R>, state: GameState) -> Self {
        let stats = SessionStats {
            max_tile: state.grid().max_tile(),
            ..SessionStats::default()
        };
        Self {
            engine,
            state,
            history: Vec::new(),
            stats,
            needs_spawn: true,
            turn_spawn: None,
            finished: false,
        }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The engine driving this session.
    #[must_use]
    pub fn engine(&self) -> &BoardEngine<R> {
        &self.engine
    }

    /// Moves submitted so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Counters for this session.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// True once `begin_turn` has reported a terminal board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Give up the session and keep its final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// One pass of the loop head: terminal check, then spawn.
    ///
    /// Under `SpawnPolicy::Always` every call spawns, including calls that
    /// follow a rejected input or a move that changed nothing. Under
    /// `SpawnPolicy::OnChange` a tile is spawned only if the grid changed
    /// since the last spawn; the first turn always spawns.
    pub fn begin_turn(&mut self) -> TurnStatus {
        if self.engine.is_terminal(&self.state) {
            if !self.finished {
                self.finished = true;
                tracing::info!(
                    score = self.state.score(),
                    moves = self.state.moves(),
                    max_tile = self.stats.max_tile,
                    "game over"
                );
            }
            return TurnStatus::Finished {
                score: self.state.score(),
            };
        }

        self.stats.turns += 1;
        let spawn_now = match self.engine.config().spawn_policy {
            SpawnPolicy::Always => true,
            SpawnPolicy::OnChange => self.needs_spawn,
        };
        if spawn_now {
            self.needs_spawn = false;
            if let Some(tile) = self.engine.spawn(&mut self.state) {
                self.stats.spawns += 1;
                self.stats.max_tile = self.stats.max_tile.max(tile.value);
                self.turn_spawn = Some(tile);
            }
        }

        TurnStatus::AwaitingMove
    }

    /// Apply a move and record it.
    pub fn submit(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.engine.apply_move(&mut self.state, direction);

        self.stats.moves += 1;
        self.stats.merges += outcome.merges;
        if outcome.changed {
            self.needs_spawn = true;
        } else {
            self.stats.noop_moves += 1;
        }
        self.stats.max_tile = self.stats.max_tile.max(self.state.grid().max_tile());

        self.history.push(MoveRecord {
            turn: self.state.moves(),
            direction,
            changed: outcome.changed,
            score_gained: outcome.score_gained,
            spawned: self.turn_spawn.take(),
        });

        outcome
    }

    /// Parse and apply a textual move. Rejected input changes nothing.
    pub fn submit_token(&mut self, token: &str) -> Result<MoveOutcome> {
        match token.parse::<Direction>() {
            Ok(direction) => Ok(self.submit(direction)),
            Err(err) => {
                tracing::debug!(token, "rejected move input");
                Err(err)
            }
        }
    }

    /// Drive the loop with moves from `source` until the board is terminal,
    /// the source stops, or `max_moves` moves have been submitted.
    ///
    /// The cap is checked before the loop head, so every turn that is
    /// opened (and spawns) is answered by a move.
    pub fn run<S: MoveSource + ?Sized>(&mut self, source: &mut S, max_moves: usize) -> SessionSummary {
        let end = loop {
            if self.history.len() >= max_moves {
                break SessionEnd::MoveLimit;
            }
            if let TurnStatus::Finished { .. } = self.begin_turn() {
                break SessionEnd::Terminal;
            }
            match source.next_move(&self.state) {
                Some(direction) => {
                    self.submit(direction);
                }
                None => break SessionEnd::Abandoned,
            }
        };

        tracing::debug!(?end, score = self.state.score(), "session run stopped");
        self.summary(end)
    }

    fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            score: self.state.score(),
            moves: self.state.moves(),
            max_tile: self.stats.max_tile,
        }
    }
}
