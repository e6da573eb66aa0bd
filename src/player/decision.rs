//! Who decides whether a drawn number gets struck.
//!
//! Humans answer through the round's [`DecisionSource`](crate::round::DecisionSource).
//! Automated players ignore that input and look at their own card, getting
//! the answer wrong with probability `mistake_rate`.

use crate::core::config::validate_mistake_rate;
use crate::core::{GameRng, LottoResult};

/// Decision capability of a player.
#[derive(Clone, Debug)]
pub enum DecisionMaker {
    /// Decision comes from outside the core.
    Human,
    /// Decision is computed, with injected mistakes.
    Automated(Automaton),
}

impl DecisionMaker {
    /// Final "strike?" decision for a drawn number.
    ///
    /// `requested` is the external answer (ignored for automated players;
    /// `None` from a human means "don't strike"). `present` is whether the
    /// number is unstruck on the player's card.
    pub fn decide(&mut self, requested: Option<bool>, present: bool) -> bool {
        match self {
            DecisionMaker::Human => requested.unwrap_or(false),
            DecisionMaker::Automated(bot) => bot.decide(present),
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, DecisionMaker::Human)
    }
}

/// Simulated player with imperfect attention.
#[derive(Clone, Debug)]
pub struct Automaton {
    mistake_rate: f64,
    rng: GameRng,
}

impl Automaton {
    /// Fails if `mistake_rate` is outside `[0, 1]`.
    pub fn new(mistake_rate: f64, rng: GameRng) -> LottoResult<Self> {
        validate_mistake_rate(mistake_rate)?;
        Ok(Self { mistake_rate, rng })
    }

    #[must_use]
    pub fn mistake_rate(&self) -> f64 {
        self.mistake_rate
    }

    /// The correct answer, inverted with probability `mistake_rate`.
    pub fn decide(&mut self, present: bool) -> bool {
        let mistake = self.rng.gen_bool(self.mistake_rate);
        present != mistake
    }
}
