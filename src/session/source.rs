//! Where a session's moves come from.
//!
//! An interactive front end implements [`MoveSource`] over its input;
//! tests and benchmarks use [`ScriptedMoves`] or [`RandomMoves`].

use std::collections::VecDeque;

use crate::core::{Direction, GameRng, GameState};

/// Supplies the next move for a session.
pub trait MoveSource {
    /// The next direction to play, or `None` to stop the session.
    fn next_move(&mut self, state: &GameState) -> Option<Direction>;
}

impl<F> MoveSource for F
where
    F: FnMut(&GameState) -> Option<Direction>,
{
    fn next_move(&mut self, state: &GameState) -> Option<Direction> {
        self(state)
    }
}

/// Plays a fixed list of moves, then stops.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Direction>,
}

impl ScriptedMoves {
    /// Create a source from a move list.
    pub fn new(moves: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _state: &GameState) -> Option<Direction> {
        self.moves.pop_front()
    }
}

/// Picks each direction uniformly at random. Never stops on its own.
#[derive(Clone, Debug)]
pub struct RandomMoves {
    rng: GameRng,
}

impl RandomMoves {
    /// Create a seeded random mover.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self, _state: &GameState) -> Option<Direction> {
        Some(Direction::ALL[self.rng.gen_range_usize(0..Direction::ALL.len())])
    }
}
