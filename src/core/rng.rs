//! Deterministic random number generation for automated play.
//!
//! The engine itself never draws random numbers. `GameRng` feeds the
//! `RandomPlayer` used for simulated games, property tests and benchmarks,
//! where the same seed must always reproduce the same game.
//!
//! ```
//! use tictactoe_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(9), b.gen_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
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

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Random boolean with the given probability of `true`.
    ///
    /// The probability is clamped to `[0, 1]`; NaN counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
