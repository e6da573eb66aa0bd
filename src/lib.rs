//! # rust-lotto
//!
//! A seedable simulator for a round of lotto (tombola): 2 to 5 players,
//! human or automated, strike numbers drawn from a shared bag until one
//! of them fills their card.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random choice flows through [`GameRng`].
//!    The same seed replays the same round.
//!
//! 2. **Closed outcomes**: a draw resolves to [`RoundStatus`] `NextMove`,
//!    `Win` or `Loose`. Losing is a value, not an error.
//!
//! 3. **Shell at the edges**: prompting and printing live behind the
//!    [`DecisionSource`] and [`EventSink`] seams.
//!
//! ## Modules
//!
//! - `core`: constants, configuration, errors, player IDs, RNG
//! - `card`: card generation, lookup and marking
//! - `pool`: the draw pool
//! - `player`: players and their decision makers
//! - `round`: the round state machine
//! - `console`: text rendering and answer parsing for the CLI

pub mod card;
pub mod console;
pub mod core;
pub mod player;
pub mod pool;
pub mod round;

// Re-export commonly used types
pub use crate::core::{GameRng, LottoConfig, LottoError, LottoResult, PlayerId};

pub use crate::card::{Card, Cell, CellPos};

pub use crate::pool::DrawPool;

pub use crate::player::{
    Automaton, DecisionMaker, MoveOutcome, Player, PlayerView, Resolution, RoundStatus,
};

pub use crate::round::{
    CorrectDecisions, DecisionSource, EventLog, EventSink, PlayerStatus, Round, RoundBuilder,
    RoundEvent, RoundOutcome, RoundState, WinReason,
};
