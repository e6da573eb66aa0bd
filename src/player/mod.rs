//! Players: a card, a move history and a way of deciding.
//!
//! Each drawn number is resolved against the player's card:
//!
//! | on card | strike? | result                         |
//! |---------|---------|--------------------------------|
//! | yes     | yes     | mark, `NextMove` or `Win`      |
//! | no      | no      | `NextMove`                     |
//! | yes     | no      | `Loose` (missed the number)    |
//! | no      | yes     | `Loose` (false strike)         |

mod decision;

pub use decision::{Automaton, DecisionMaker};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{Card, CellPos};
use crate::core::{GameRng, LottoResult, NUMBERS_PER_CARD};

/// Result of resolving one drawn number for one player.
///
/// A closed set; the variants carry no ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// The player stays in and play continues.
    NextMove,
    /// The player struck their last number.
    Win,
    /// The player made a wrong call and is out.
    Loose,
}

/// What the player actually did with a drawn number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Struck a number that was on the card.
    Struck(CellPos),
    /// Correctly let a number pass.
    Skipped,
    /// Let a number on the card pass.
    Missed(CellPos),
    /// Tried to strike a number that was not on the card.
    FalseStrike,
}

/// Status plus the move that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub status: RoundStatus,
    pub outcome: MoveOutcome,
}

/// A participant in a round.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    card: Card,
    moves: Vec<CellPos>,
    decision: DecisionMaker,
}

impl Player {
    /// A player whose decisions come from outside.
    pub fn human(name: impl Into<String>, card: Card) -> Self {
        Self::with_decision(name, card, DecisionMaker::Human)
    }

    /// A simulated player. `rng` drives its mistakes.
    pub fn automated(
        name: impl Into<String>,
        card: Card,
        mistake_rate: f64,
        rng: GameRng,
    ) -> LottoResult<Self> {
        let bot = Automaton::new(mistake_rate, rng)?;
        Ok(Self::with_decision(name, card, DecisionMaker::Automated(bot)))
    }

    pub fn with_decision(name: impl Into<String>, card: Card, decision: DecisionMaker) -> Self {
        Self {
            name: name.into(),
            card,
            moves: Vec::with_capacity(NUMBERS_PER_CARD),
            decision,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.decision.is_human()
    }

    /// Mistake rate of an automated player.
    #[must_use]
    pub fn mistake_rate(&self) -> Option<f64> {
        match &self.decision {
            DecisionMaker::Human => None,
            DecisionMaker::Automated(bot) => Some(bot.mistake_rate()),
        }
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Struck positions in the order they were struck.
    #[must_use]
    pub fn moves(&self) -> &[CellPos] {
        &self.moves
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Where `number` sits on the card, if present and unstruck.
    #[must_use]
    pub fn check_barrel(&self, number: u8) -> Option<CellPos> {
        self.card.locate(number)
    }

    /// Decide on `number` and apply the result to the card.
    ///
    /// Errors only on a broken card invariant.
    pub fn decide_and_resolve(
        &mut self,
        requested: Option<bool>,
        number: u8,
    ) -> LottoResult<RoundStatus> {
        self.resolve(requested, number).map(|r| r.status)
    }

    /// Like [`decide_and_resolve`](Self::decide_and_resolve), also reporting
    /// what the player did.
    pub fn resolve(&mut self, requested: Option<bool>, number: u8) -> LottoResult<Resolution> {
        let found = self.check_barrel(number);
        let strike = self.decision.decide(requested, found.is_some());

        let resolution = match (found, strike) {
            (Some(pos), true) => {
                self.card.mark(pos)?;
                self.moves.push(pos);
                let status = if self.moves.len() >= NUMBERS_PER_CARD {
                    RoundStatus::Win
                } else {
                    RoundStatus::NextMove
                };
                Resolution { status, outcome: MoveOutcome::Struck(pos) }
            }
            (None, false) => Resolution {
                status: RoundStatus::NextMove,
                outcome: MoveOutcome::Skipped,
            },
            (Some(pos), false) => Resolution {
                status: RoundStatus::Loose,
                outcome: MoveOutcome::Missed(pos),
            },
            (None, true) => Resolution {
                status: RoundStatus::Loose,
                outcome: MoveOutcome::FalseStrike,
            },
        };

        debug!(
            target: "rust_lotto::player",
            player = %self.name,
            number,
            outcome = ?resolution.outcome,
            status = ?resolution.status,
            "resolved draw"
        );

        Ok(resolution)
    }

    /// Borrowed snapshot for rendering and prompting.
    #[must_use]
    pub fn view(&self) -> PlayerView<'_> {
        PlayerView {
            name: &self.name,
            is_human: self.is_human(),
            move_count: self.moves.len(),
            card: &self.card,
        }
    }
}

/// What a display or prompt needs to know about a player.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlayerView<'a> {
    pub name: &'a str,
    pub is_human: bool,
    pub move_count: usize,
    pub card: &'a Card,
}
