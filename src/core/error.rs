//! Error type shared by the whole crate.
//!
//! Construction errors reject bad setup input. Contract violations
//! (`CellNotMarkable`, `PoolExhausted`, `RoundFinished`) mean the caller broke
//! an invariant and should be treated as fatal. Losing a round is not an
//! error: that is [`RoundStatus::Loose`](crate::player::RoundStatus::Loose).

use thiserror::Error;

/// Errors raised while building or driving a round.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LottoError {
    #[error("a round needs {min} to {max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("a card needs at least {required} numbers, got {supplied}")]
    NotEnoughNumbers { supplied: usize, required: usize },

    #[error("number {0} appears more than once")]
    DuplicateNumber(u8),

    #[error("number {0} is outside 1..={max}", max = crate::core::MAX_NUMBER)]
    NumberOutOfRange(u8),

    #[error("row {row} of the card layout is invalid: {reason}")]
    InvalidLayout { row: usize, reason: &'static str },

    #[error("mistake rate must be within [0, 1], got {0}")]
    InvalidMistakeRate(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cell ({row}, {col}) is blank or already marked")]
    CellNotMarkable { row: usize, col: usize },

    #[error("the draw pool is exhausted")]
    PoolExhausted,

    #[error("the round has already finished")]
    RoundFinished,
}

/// Result alias used across the crate.
pub type LottoResult<T> = Result<T, LottoError>;
