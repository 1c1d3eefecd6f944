// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for base selection. Seeded runs replay the same stream,
/// unseeded runs draw their seed from the thread RNG.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        StaticRandom { rng: ChaCha8Rng::from_seed(seed) }
    }

    pub fn with_seed(seed: u64) -> Self {
        StaticRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seeded if a seed is given, entropy-seeded otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn next(&mut self) -> u64 {
        self.rng.random()
    }

    /// Uniform value in `[min_value, max_value)`
    pub fn next_range(&mut self, min_value: u64, max_value: u64) -> u64 {
        self.rng.random_range(min_value..max_value)
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}
