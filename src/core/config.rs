//! Game constants and round configuration.

use serde::{Deserialize, Serialize};

use super::error::{LottoError, LottoResult};
use super::rng::GameRng;

/// Highest number in the bag. Numbers run from 1 to `MAX_NUMBER`.
pub const MAX_NUMBER: u8 = 90;

/// Rows on a card.
pub const CARD_ROWS: usize = 3;

/// Columns on a card.
pub const CARD_COLS: usize = 9;

/// Populated cells per row; the rest of the row is blank.
pub const NUMBERS_PER_ROW: usize = 5;

/// Populated cells per card. Striking all of them wins.
pub const NUMBERS_PER_CARD: usize = CARD_ROWS * NUMBERS_PER_ROW;

/// Fewest players a round accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a round accepts.
pub const MAX_PLAYERS: usize = 5;

/// Probability that an automated player gets a decision wrong.
pub const DEFAULT_MISTAKE_RATE: f64 = 0.01;

/// Round configuration.
///
/// ```
/// use rust_lotto::core::LottoConfig;
///
/// let config = LottoConfig::default().with_seed(7).with_mistake_rate(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LottoConfig {
    /// Root seed for cards, pool and automated players.
    pub seed: u64,

    /// Default mistake rate for automated players.
    pub mistake_rate: f64,

    /// Fewest players allowed in the round.
    pub min_players: usize,

    /// Most players allowed in the round.
    pub max_players: usize,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mistake_rate: DEFAULT_MISTAKE_RATE,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl LottoConfig {
    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the default automated mistake rate.
    #[must_use]
    pub fn with_mistake_rate(mut self, rate: f64) -> Self {
        self.mistake_rate = rate;
        self
    }

    /// Narrow the accepted roster size. Bounds are checked by [`validate`](Self::validate).
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Check the configuration before a round is built from it.
    pub fn validate(&self) -> LottoResult<()> {
        validate_mistake_rate(self.mistake_rate)?;

        if self.min_players < MIN_PLAYERS
            || self.max_players > MAX_PLAYERS
            || self.min_players > self.max_players
        {
            return Err(LottoError::InvalidConfig(format!(
                "player bounds {}..={} must lie within {}..={}",
                self.min_players, self.max_players, MIN_PLAYERS, MAX_PLAYERS
            )));
        }

        Ok(())
    }

    /// Check a roster size against the configured bounds.
    pub fn check_player_count(&self, count: usize) -> LottoResult<()> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(LottoError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }

    /// Root RNG for this configuration.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}

/// Reject mistake rates outside `[0, 1]` (NaN included).
pub fn validate_mistake_rate(rate: f64) -> LottoResult<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(LottoError::InvalidMistakeRate(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(NUMBERS_PER_CARD, 15);
        assert!(NUMBERS_PER_ROW <= CARD_COLS);
        assert!(NUMBERS_PER_CARD <= MAX_NUMBER as usize);
    }

    #[test]
    fn test_default_config() {
        let config = LottoConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.mistake_rate, DEFAULT_MISTAKE_RATE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LottoConfig::default()
            .with_seed(9)
            .with_mistake_rate(0.25)
            .with_player_bounds(3, 4);

        assert_eq!(config.seed, 9);
        assert_eq!(config.mistake_rate, 0.25);
        assert!(config.validate().is_ok());
        assert!(config.check_player_count(2).is_err());
        assert!(config.check_player_count(4).is_ok());
    }

    #[test]
    fn test_invalid_mistake_rate() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = LottoConfig::default().with_mistake_rate(rate);
            assert!(matches!(config.validate(), Err(LottoError::InvalidMistakeRate(_))));
        }
    }

    #[test]
    fn test_invalid_player_bounds() {
        for (min, max) in [(1, 5), (2, 6), (4, 3)] {
            let config = LottoConfig::default().with_player_bounds(min, max);
            assert!(matches!(config.validate(), Err(LottoError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_player_count_error() {
        let err = LottoConfig::default().check_player_count(1).unwrap_err();
        assert_eq!(err, LottoError::InvalidPlayerCount { count: 1, min: 2, max: 5 });
    }

    #[test]
    fn test_config_serde() {
        let config = LottoConfig::default().with_seed(1234);
        let json = serde_json::to_string(&config).unwrap();
        let back: LottoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let partial: LottoConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(partial.seed, 5);
        assert_eq!(partial.max_players, MAX_PLAYERS);
    }
}
