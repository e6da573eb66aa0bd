//! Builder for a ready-to-play round.

use tracing::debug;

use super::Round;
use crate::card::Card;
use crate::core::{LottoConfig, LottoResult};
use crate::player::Player;
use crate::pool::DrawPool;

enum Entrant {
    Human(String),
    Automated { name: String, mistake_rate: Option<f64> },
    Ready(Player),
}

/// Builds a [`Round`] from a [`LottoConfig`].
///
/// Cards, the pool order and every automated player's mistakes are derived
/// from the config seed, so the same builder calls give the same round.
///
/// ```
/// use rust_lotto::core::LottoConfig;
/// use rust_lotto::round::{CorrectDecisions, RoundBuilder, RoundEvent};
///
/// let mut round = RoundBuilder::new(LottoConfig::default().with_seed(3))
///     .automated("Bob")
///     .automated("Eve")
///     .build()
///     .unwrap();
///
/// let outcome = round.run(&mut CorrectDecisions, &mut |_: &RoundEvent| {}).unwrap();
/// assert!(outcome.draws > 0);
/// ```
pub struct RoundBuilder {
    config: LottoConfig,
    entrants: Vec<Entrant>,
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self::new(LottoConfig::default())
    }
}

impl RoundBuilder {
    pub fn new(config: LottoConfig) -> Self {
        Self {
            config,
            entrants: Vec::new(),
        }
    }

    /// Add a human player with a dealt card.
    #[must_use]
    pub fn human(mut self, name: impl Into<String>) -> Self {
        self.entrants.push(Entrant::Human(name.into()));
        self
    }

    /// Add an automated player using the config's mistake rate.
    #[must_use]
    pub fn automated(mut self, name: impl Into<String>) -> Self {
        self.entrants.push(Entrant::Automated {
            name: name.into(),
            mistake_rate: None,
        });
        self
    }

    /// Add an automated player with its own mistake rate.
    #[must_use]
    pub fn automated_with_rate(mut self, name: impl Into<String>, mistake_rate: f64) -> Self {
        self.entrants.push(Entrant::Automated {
            name: name.into(),
            mistake_rate: Some(mistake_rate),
        });
        self
    }

    /// Add a player built elsewhere, e.g. with a fixed card.
    #[must_use]
    pub fn player(mut self, player: Player) -> Self {
        self.entrants.push(Entrant::Ready(player));
        self
    }

    pub fn build(self) -> LottoResult<Round> {
        self.config.validate()?;
        self.config.check_player_count(self.entrants.len())?;

        let root = self.config.rng();
        let mut card_rng = root.for_context("cards");
        let mut pool_rng = root.for_context("pool");
        let mut mistake_rng = root.for_context("mistakes");

        let mut players = Vec::with_capacity(self.entrants.len());
        for entrant in self.entrants {
            let player = match entrant {
                Entrant::Human(name) => Player::human(name, Card::generate(&mut card_rng)),
                Entrant::Automated { name, mistake_rate } => Player::automated(
                    name,
                    Card::generate(&mut card_rng),
                    mistake_rate.unwrap_or(self.config.mistake_rate),
                    mistake_rng.fork(),
                )?,
                Entrant::Ready(player) => player,
            };
            debug!(
                target: "rust_lotto::round",
                player = %player.name(),
                human = player.is_human(),
                "registered player"
            );
            players.push(player);
        }

        Round::with_config(&self.config, players, DrawPool::new(&mut pool_rng))
    }
}
