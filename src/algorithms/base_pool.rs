// src/algorithms/base_pool.rs

use std::collections::HashSet;
use crate::core::static_random::StaticRandom;

/// Candidate bases `[2, n - 2]` drawn without replacement.
pub struct BasePool {
    low: u64,
    high: u64,
    tried: HashSet<u64>,
}

impl BasePool {
    /// Pool for target `n` (n >= 4) with `initial_base` already marked tried
    pub fn new(n: u64, initial_base: u64) -> Self {
        let mut pool = BasePool {
            low: 2,
            high: n - 2,
            tried: HashSet::new(),
        };
        pool.mark_tried(initial_base);
        pool
    }

    pub fn size(&self) -> u64 {
        self.high - self.low + 1
    }

    pub fn remaining(&self) -> u64 {
        self.size() - self.tried.len() as u64
    }

    pub fn mark_tried(&mut self, base: u64) {
        if (self.low..=self.high).contains(&base) {
            self.tried.insert(base);
        }
    }

    pub fn is_tried(&self, base: u64) -> bool {
        self.tried.contains(&base)
    }

    /// Uniform draw among the untried bases, or None once the pool is empty.
    pub fn draw(&self, rng: &mut StaticRandom) -> Option<u64> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }

        // Rejection sampling while at least half the pool is free
        if remaining >= self.size() / 2 {
            loop {
                let candidate = rng.next_range(self.low, self.high + 1);
                if !self.tried.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }

        let k = rng.next_range(0, remaining);
        (self.low..=self.high)
            .filter(|base| !self.tried.contains(base))
            .nth(k as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_base_excluded() {
        let pool = BasePool::new(15, 2);
        assert_eq!(pool.size(), 12);
        assert_eq!(pool.remaining(), 11);
        let mut rng = StaticRandom::with_seed(1);
        for _ in 0..200 {
            let base = pool.draw(&mut rng).unwrap();
            assert!((3..=13).contains(&base));
        }
    }

    #[test]
    fn test_draws_until_empty() {
        let mut pool = BasePool::new(13, 2);
        let mut rng = StaticRandom::with_seed(3);
        let mut seen = vec![2];
        while let Some(base) = pool.draw(&mut rng) {
            assert!(!pool.is_tried(base));
            pool.mark_tried(base);
            seen.push(base);
        }
        seen.sort();
        assert_eq!(seen, (2..=11).collect::<Vec<u64>>());
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_smallest_pool() {
        let pool = BasePool::new(4, 2);
        assert_eq!(pool.remaining(), 0);
        assert_eq!(pool.draw(&mut StaticRandom::with_seed(0)), None);
    }
}
