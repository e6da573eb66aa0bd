//! Round events and the sink that receives them.

use serde::{Deserialize, Serialize};

use super::WinReason;
use crate::card::CellPos;
use crate::core::PlayerId;

/// Something that happened during a round, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// First draw is about to happen.
    RoundStarted { players: usize },
    /// A number came out of the pool.
    NumberDrawn { draw: u32, number: u8 },
    /// A player struck a number on their card.
    Struck { player: PlayerId, number: u8, pos: CellPos },
    /// A player correctly let a number pass.
    Skipped { player: PlayerId, number: u8 },
    /// A player let a number on their card pass.
    Missed { player: PlayerId, number: u8, pos: CellPos },
    /// A player struck a number that is not on their card.
    FalseStrike { player: PlayerId, number: u8 },
    /// A player left the round; `remaining` players are still in.
    Eliminated { player: PlayerId, remaining: usize },
    /// The round has a winner.
    Won { player: PlayerId, reason: WinReason },
    /// The pool ran dry with nobody winning.
    PoolExhausted,
    /// Every player was eliminated.
    NoPlayersLeft,
    /// A draw finished without ending the round.
    CardsUpdated { draw: u32 },
}

impl RoundEvent {
    /// Does this event end the round?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RoundEvent::Won { .. } | RoundEvent::PoolExhausted | RoundEvent::NoPlayersLeft
        )
    }
}

/// Receiver of round events.
///
/// Implemented for any `FnMut(&RoundEvent)`.
pub trait EventSink {
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event)
    }
}

/// Sink that records every event.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Events concerning one player.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &RoundEvent> {
        self.events.iter().filter(move |e| match e {
            RoundEvent::Struck { player: p, .. }
            | RoundEvent::Skipped { player: p, .. }
            | RoundEvent::Missed { player: p, .. }
            | RoundEvent::FalseStrike { player: p, .. }
            | RoundEvent::Eliminated { player: p, .. }
            | RoundEvent::Won { player: p, .. } => *p == player,
            _ => false,
        })
    }

    #[must_use]
    pub fn into_events(self) -> Vec<RoundEvent> {
        self.events
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
