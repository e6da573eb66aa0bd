//! The draw pool ("bag" of numbered barrels).
//!
//! A round owns one pool holding a permutation of `1..=MAX_NUMBER`.
//! Numbers come out one at a time and never return.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, LottoError, LottoResult, MAX_NUMBER};

/// Shuffled numbers waiting to be drawn.
///
/// Stored in reverse draw order so drawing is a `pop`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPool {
    remaining: Vec<u8>,
}

impl DrawPool {
    /// Shuffle the full `1..=MAX_NUMBER` range.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut remaining: Vec<u8> = (1..=MAX_NUMBER).collect();
        rng.shuffle(&mut remaining);
        Self { remaining }
    }

    /// A pool that yields `numbers` in exactly the given order.
    ///
    /// Used to replay a known sequence. Every number must be in
    /// `1..=MAX_NUMBER` and appear at most once.
    ///
    /// ```
    /// use rust_lotto::pool::DrawPool;
    ///
    /// let mut pool = DrawPool::from_sequence([3, 1, 2]).unwrap();
    /// assert_eq!(pool.draw(), Some(3));
    /// assert_eq!(pool.draw(), Some(1));
    /// assert_eq!(pool.draw(), Some(2));
    /// assert_eq!(pool.draw(), None);
    /// ```
    pub fn from_sequence(numbers: impl IntoIterator<Item = u8>) -> LottoResult<Self> {
        let mut seen = [false; u8::MAX as usize + 1];
        let mut remaining = Vec::new();

        for n in numbers {
            if !(1..=MAX_NUMBER).contains(&n) {
                return Err(LottoError::NumberOutOfRange(n));
            }
            if std::mem::replace(&mut seen[n as usize], true) {
                return Err(LottoError::DuplicateNumber(n));
            }
            remaining.push(n);
        }

        remaining.reverse();
        Ok(Self { remaining })
    }

    /// Take the next number, or `None` once the pool is empty.
    ///
    /// Keeps returning `None` after exhaustion.
    pub fn draw(&mut self) -> Option<u8> {
        self.remaining.pop()
    }

    /// Take the next number on a path that has already checked
    /// [`is_exhausted`](Self::is_exhausted).
    pub fn draw_next(&mut self) -> LottoResult<u8> {
        self.draw().ok_or(LottoError::PoolExhausted)
    }

    /// Numbers still in the pool.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}
