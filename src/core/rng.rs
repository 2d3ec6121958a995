//! Random sources for tile spawning.
//!
//! The engine only needs two capabilities from randomness: a uniform index
//! into the list of empty cells, and a biased coin for the tile value. Both
//! sit behind [`TileSource`] so tests can inject a scripted sequence.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawns
//! - **Entropy-seeded by default**: Separate sessions see different sequences
//!
//! ```
//! use rust_2048::core::{GameRng, TileSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! assert_eq!(rng.pick_index(16), replay.pick_index(16));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness consumed by spawning.
pub trait TileSource {
    /// Uniform index in `0..len`. Never called with `len == 0`; returning an
    /// index outside the range is a contract violation.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        (**self).gen_bool(probability)
    }
}

impl<T: TileSource + ?Sized> TileSource for Box<T> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        (**self).gen_bool(probability)
    }
}

/// Seedable ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is kept, so a session can still be replayed by
    /// reading [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl TileSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays fixed index and coin sequences.
///
/// Both sequences cycle when exhausted. Indices are reduced modulo the
/// requested length, and coin results ignore the requested probability.
/// An empty index script always yields 0; an empty coin script always
/// yields `false` (a 2 tile).
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    coins: Vec<bool>,
    next_index: usize,
    next_coin: usize,
}

impl ScriptedSource {
    /// Create a source from index and coin scripts.
    #[must_use]
    pub fn new(indices: Vec<usize>, coins: Vec<bool>) -> Self {
        Self {
            indices,
            coins,
            next_index: 0,
            next_coin: 0,
        }
    }

    /// A source that always picks the first empty cell and spawns `value`.
    #[must_use]
    pub fn first_cell(value: u32) -> Self {
        Self::new(vec![0], vec![value == 4])
    }
}

impl TileSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() || len == 0 {
            return 0;
        }
        let index = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        index % len
    }

    fn gen_bool(&mut self, _probability: f64) -> bool {
        if self.coins.is_empty() {
            return false;
        }
        let coin = self.coins[self.next_coin % self.coins.len()];
        self.next_coin += 1;
        coin
    }
}
