//! Deterministic random number generation.
//!
//! Every random choice in a round goes through [`GameRng`]: card sampling,
//! the draw pool shuffle and the mistake coin flip of automated players.
//! A round built from the same seed plays out identically.
//!
//! ## Streams
//!
//! - **Forks**: each automated player gets its own fork so that adding a
//!   player does not shift the coin flips of the others.
//! - **Context streams**: card dealing and pool shuffling use separate
//!   named streams derived from the root seed.
//!
//! ```
//! use rust_lotto::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut pool_a = root.for_context("pool");
//! let mut pool_b = GameRng::new(42).for_context("pool");
//!
//! let mut a: Vec<u8> = (1..=10).collect();
//! let mut b = a.clone();
//! pool_a.shuffle(&mut a);
//! pool_b.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seedable RNG shared by card generation, the draw pool and automated players.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic branch.
    ///
    /// The n-th fork of a given seed always has the same sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Derive a named stream from this RNG's seed.
    ///
    /// Does not advance `self`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Return `true` with the given probability.
    ///
    /// `probability` must lie in `[0, 1]`; callers validate it up front.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct elements from `items`, in sampling order.
    ///
    /// Returns every element (shuffled) if `amount` exceeds the slice length.
    pub fn sample<T: Copy>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        rand::seq::index::sample(&mut self.inner, items.len(), amount)
            .into_iter()
            .map(|i| items[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flips(rng: &mut GameRng, n: usize) -> Vec<bool> {
        (0..n).map(|_| rng.gen_bool(0.5)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(flips(&mut rng1, 64), flips(&mut rng2, 64));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(flips(&mut rng1, 64), flips(&mut rng2, 64));
    }

    #[test]
    fn test_forks_are_independent_and_repeatable() {
        let mut root1 = GameRng::new(7);
        let mut root2 = GameRng::new(7);

        let mut a1 = root1.fork();
        let mut b1 = root1.fork();
        let mut a2 = root2.fork();

        assert_eq!(a1.seed(), a2.seed());
        assert_ne!(a1.seed(), b1.seed());
        assert_eq!(flips(&mut a1, 32), flips(&mut a2, 32));
        assert_ne!(flips(&mut a1, 64), flips(&mut b1, 64));
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut cards = rng.for_context("cards");
        let mut pool = rng.for_context("pool");
        let mut cards_again = GameRng::new(42).for_context("cards");

        assert_ne!(cards.seed(), pool.seed());
        assert_eq!(flips(&mut cards, 32), flips(&mut cards_again, 32));
        assert_ne!(flips(&mut cards, 64), flips(&mut pool, 64));
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (1..=90).collect();
        rng.shuffle(&mut data);

        assert_ne!(data, (1..=90).collect::<Vec<u8>>());
        data.sort_unstable();
        assert_eq!(data, (1..=90).collect::<Vec<u8>>());
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(42);
        let items: Vec<usize> = (0..9).collect();

        for _ in 0..50 {
            let mut picked = rng.sample(&items, 5);
            assert_eq!(picked.len(), 5);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 5);
            assert!(picked.iter().all(|i| *i < 9));
        }

        assert_eq!(rng.sample(&items, 20).len(), 9);
        assert!(rng.sample::<usize>(&[], 3).is_empty());
    }
}
