//! Deterministic random number generation.
//!
//! All randomness in the engine (deck shuffles, random kingdom selection,
//! seating order) flows through one seeded [`GameRng`] so that a full game
//! can be replayed exactly from its seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for a single game.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The same seed produces an identical sequence of shuffles and samples.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Sample `amount` distinct indices from `0..len` without replacement.
    ///
    /// Panics if `amount > len`.
    #[must_use]
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }
}
