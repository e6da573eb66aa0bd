//! Core plumbing: constants, configuration, errors, player IDs, RNG.
//!
//! Nothing in here knows how a round is played. The game modules
//! (`card`, `pool`, `player`, `round`) build on these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    LottoConfig, CARD_COLS, CARD_ROWS, DEFAULT_MISTAKE_RATE, MAX_NUMBER, MAX_PLAYERS, MIN_PLAYERS,
    NUMBERS_PER_CARD, NUMBERS_PER_ROW,
};
pub use error::{LottoError, LottoResult};
pub use player::PlayerId;
pub use rng::GameRng;
