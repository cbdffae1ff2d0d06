//! Injectable source of randomness for the shuffling policies.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A seeded random source.
///
/// The seed is kept alongside the generator so that any shuffled recital can be
/// reproduced by constructing a new `Entropy` from the same seed.
pub struct Entropy {
    seed: u64,
    rng: StdRng,
}

impl Entropy {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the thread-local generator.
    #[must_use]
    pub fn fresh() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly shuffle `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

// Generator state is noise in logs; the seed is what reproduces a run.
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
