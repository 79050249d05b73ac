//! RNG module - seedable randomness for hazard placement
//!
//! Wraps ChaCha8 so that a board built from the same seed always receives the
//! same hazard layout. Interactive sessions seed from OS entropy instead.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the board
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system
    ///
    /// The drawn seed is kept so a surprising layout can be replayed with
    /// [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly distributed index in `[0, upper)`
    ///
    /// `upper` must be non-zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}
