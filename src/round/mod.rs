//! Round orchestration.
//!
//! A round draws numbers until someone completes their card, all but one
//! player has been eliminated, or the pool runs out.
//!
//! ## State Machine
//!
//! ```text
//! InProgress --Win-------------------------> Won(CompletedCard)
//! InProgress --Loose, 1 player left--------> Won(Attrition)
//! InProgress --Loose, 0 players left-------> Drawn
//! InProgress --pool empty------------------> Drawn
//! ```
//!
//! Within a draw, players act in registration order. The roster is
//! snapshotted at the start of the draw and eliminations are applied to
//! the live roster as they happen.

mod builder;
mod decisions;
mod events;

pub use builder::RoundBuilder;
pub use decisions::{CorrectDecisions, DecisionSource};
pub use events::{EventLog, EventSink, RoundEvent};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{LottoConfig, LottoError, LottoResult, PlayerId};
use crate::player::{MoveOutcome, Player, PlayerView, RoundStatus};
use crate::pool::DrawPool;

/// Why a round was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner struck every number on their card.
    CompletedCard,
    /// Everyone else was eliminated.
    Attrition,
}

/// Round-level state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won { winner: PlayerId, reason: WinReason },
    /// Finished without a winner.
    Drawn,
}

impl RoundState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::InProgress)
    }

    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            RoundState::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

/// Per-player standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    Active,
    Eliminated,
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Option<PlayerId>,
    pub winner_name: Option<String>,
    pub reason: Option<WinReason>,
    /// Numbers drawn before the round ended.
    pub draws: u32,
}

/// One round of lotto.
#[derive(Clone, Debug)]
pub struct Round {
    players: Vec<Player>,
    statuses: Vec<PlayerStatus>,
    active: Vec<PlayerId>,
    pool: DrawPool,
    draws: u32,
    state: RoundState,
    started: bool,
}

impl Round {
    /// Start a round with 2 to 5 players, in turn order.
    pub fn new(players: Vec<Player>, pool: DrawPool) -> LottoResult<Self> {
        Self::with_config(&LottoConfig::default(), players, pool)
    }

    /// Start a round whose roster must fit the config's player bounds.
    pub fn with_config(
        config: &LottoConfig,
        players: Vec<Player>,
        pool: DrawPool,
    ) -> LottoResult<Self> {
        config.validate()?;
        config.check_player_count(players.len())?;

        let active = PlayerId::all(players.len()).collect();
        Ok(Self {
            statuses: vec![PlayerStatus::Active; players.len()],
            players,
            active,
            pool,
            draws: 0,
            state: RoundState::InProgress,
            started: false,
        })
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Numbers drawn so far.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Every registered player, eliminated ones included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_status(&self, id: PlayerId) -> Option<PlayerStatus> {
        self.statuses.get(id.index()).copied()
    }

    /// Players still in the round, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    /// Views of the players still in the round.
    #[must_use]
    pub fn active_views(&self) -> Vec<PlayerView<'_>> {
        self.active.iter().map(|id| self.players[id.index()].view()).collect()
    }

    #[must_use]
    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    /// Draw the next number and let every active player act on it.
    pub fn step(
        &mut self,
        decisions: &mut impl DecisionSource,
        events: &mut impl EventSink,
    ) -> LottoResult<RoundState> {
        self.ensure_running(events)?;

        match self.pool.draw() {
            Some(number) => self.resolve_draw(number, decisions, events),
            None => {
                info!(target: "rust_lotto::round", draws = self.draws, "pool exhausted, round drawn");
                self.state = RoundState::Drawn;
                events.on_event(&RoundEvent::PoolExhausted);
                Ok(self.state)
            }
        }
    }

    /// Let every active player act on a number just taken from the pool.
    fn resolve_draw(
        &mut self,
        number: u8,
        decisions: &mut impl DecisionSource,
        events: &mut impl EventSink,
    ) -> LottoResult<RoundState> {
        self.draws += 1;
        info!(target: "rust_lotto::round", draw = self.draws, number, "number drawn");
        events.on_event(&RoundEvent::NumberDrawn { draw: self.draws, number });

        let turn_order = self.active.clone();
        for id in turn_order {
            let player = &mut self.players[id.index()];
            let requested = if player.is_human() {
                Some(decisions.decide(&player.view(), number))
            } else {
                None
            };

            let resolution = player.resolve(requested, number)?;
            events.on_event(&move_event(id, number, resolution.outcome));

            match resolution.status {
                RoundStatus::NextMove => {}
                RoundStatus::Win => {
                    self.finish_won(id, WinReason::CompletedCard, events);
                    return Ok(self.state);
                }
                RoundStatus::Loose => {
                    if self.eliminate(id, events) {
                        return Ok(self.state);
                    }
                }
            }
        }

        events.on_event(&RoundEvent::CardsUpdated { draw: self.draws });
        Ok(self.state)
    }

    /// Play until the round ends.
    pub fn run(
        &mut self,
        decisions: &mut impl DecisionSource,
        events: &mut impl EventSink,
    ) -> LottoResult<RoundOutcome> {
        while !self.state.is_terminal() {
            self.step(decisions, events)?;
        }
        self.outcome().ok_or(LottoError::RoundFinished)
    }

    /// Summary once the round is over.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        let (winner, reason) = match self.state {
            RoundState::InProgress => return None,
            RoundState::Won { winner, reason } => (Some(winner), Some(reason)),
            RoundState::Drawn => (None, None),
        };

        Some(RoundOutcome {
            winner,
            winner_name: winner.and_then(|id| self.player(id)).map(|p| p.name().to_string()),
            reason,
            draws: self.draws,
        })
    }

    fn ensure_running(&mut self, events: &mut impl EventSink) -> LottoResult<()> {
        if self.state.is_terminal() {
            return Err(LottoError::RoundFinished);
        }
        if !self.started {
            self.started = true;
            info!(target: "rust_lotto::round", players = self.players.len(), "round started");
            events.on_event(&RoundEvent::RoundStarted { players: self.players.len() });
        }
        Ok(())
    }

    /// Drop `id` from the roster. Returns true if that ended the round.
    fn eliminate(&mut self, id: PlayerId, events: &mut impl EventSink) -> bool {
        self.statuses[id.index()] = PlayerStatus::Eliminated;
        self.active.retain(|&p| p != id);

        let remaining = self.active.len();
        info!(
            target: "rust_lotto::round",
            player = %self.players[id.index()].name(),
            remaining,
            "player eliminated"
        );
        events.on_event(&RoundEvent::Eliminated { player: id, remaining });

        match self.active.as_slice() {
            [survivor] => {
                let survivor = *survivor;
                self.finish_won(survivor, WinReason::Attrition, events);
                true
            }
            [] => {
                info!(target: "rust_lotto::round", "no players left, round drawn");
                self.state = RoundState::Drawn;
                events.on_event(&RoundEvent::NoPlayersLeft);
                true
            }
            _ => false,
        }
    }

    fn finish_won(&mut self, winner: PlayerId, reason: WinReason, events: &mut impl EventSink) {
        info!(
            target: "rust_lotto::round",
            winner = %self.players[winner.index()].name(),
            ?reason,
            draws = self.draws,
            "round won"
        );
        self.state = RoundState::Won { winner, reason };
        events.on_event(&RoundEvent::Won { player: winner, reason });
    }
}

fn move_event(player: PlayerId, number: u8, outcome: MoveOutcome) -> RoundEvent {
    match outcome {
        MoveOutcome::Struck(pos) => RoundEvent::Struck { player, number, pos },
        MoveOutcome::Skipped => RoundEvent::Skipped { player, number },
        MoveOutcome::Missed(pos) => RoundEvent::Missed { player, number, pos },
        MoveOutcome::FalseStrike => RoundEvent::FalseStrike { player, number },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CellPos};
    use crate::core::GameRng;

    fn layout(start: u8) -> Card {
        let row = |s: u8| [s, s + 1, s + 2, s + 3, s + 4, 0, 0, 0, 0];
        Card::from_layout([row(start), row(start + 5), row(start + 10)]).unwrap()
    }

    fn humans(count: u8) -> Vec<Player> {
        (0..count)
            .map(|i| Player::human(format!("P{}", i), layout(1 + i * 15)))
            .collect()
    }

    #[test]
    fn test_player_count_bounds() {
        for count in [0u8, 1, 6] {
            let err = Round::new(humans(count), DrawPool::from_sequence([]).unwrap()).unwrap_err();
            assert!(matches!(err, LottoError::InvalidPlayerCount { .. }));
        }
        for count in 2u8..=5 {
            assert!(Round::new(humans(count), DrawPool::from_sequence([]).unwrap()).is_ok());
        }
    }

    #[test]
    fn test_config_bounds_apply_to_direct_rounds() {
        let config = LottoConfig::default().with_player_bounds(3, 4);

        let err = Round::with_config(&config, humans(2), DrawPool::from_sequence([]).unwrap()).unwrap_err();
        assert_eq!(err, LottoError::InvalidPlayerCount { count: 2, min: 3, max: 4 });
        assert!(Round::with_config(&config, humans(4), DrawPool::from_sequence([]).unwrap()).is_ok());

        let inverted = LottoConfig::default().with_player_bounds(4, 3);
        assert!(matches!(
            Round::with_config(&inverted, humans(3), DrawPool::from_sequence([]).unwrap()),
            Err(LottoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_initial_state() {
        let round = Round::new(humans(3), DrawPool::new(&mut GameRng::new(1))).unwrap();
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.draws(), 0);
        assert_eq!(round.active_players().len(), 3);
        assert_eq!(round.active_views().len(), 3);
        assert_eq!(round.pool().remaining(), 90);
        assert!(round.outcome().is_none());
    }

    #[test]
    fn test_skip_keeps_round_going() {
        let mut round = Round::new(humans(2), DrawPool::from_sequence([88]).unwrap()).unwrap();
        let mut log = EventLog::new();

        let state = round.step(&mut CorrectDecisions, &mut log).unwrap();

        assert_eq!(state, RoundState::InProgress);
        assert_eq!(round.draws(), 1);
        assert!(round.players().iter().all(|p| p.move_count() == 0));
        assert_eq!(
            log.events().last(),
            Some(&RoundEvent::CardsUpdated { draw: 1 })
        );
    }

    #[test]
    fn test_empty_pool_draws_round() {
        let mut round = Round::new(humans(2), DrawPool::from_sequence([]).unwrap()).unwrap();
        let mut log = EventLog::new();

        assert_eq!(round.step(&mut CorrectDecisions, &mut log).unwrap(), RoundState::Drawn);
        assert_eq!(
            log.events(),
            &[RoundEvent::RoundStarted { players: 2 }, RoundEvent::PoolExhausted]
        );
        assert_eq!(
            round.outcome(),
            Some(RoundOutcome { winner: None, winner_name: None, reason: None, draws: 0 })
        );
    }

    #[test]
    fn test_finished_round_rejects_steps() {
        let mut round = Round::new(humans(2), DrawPool::from_sequence([]).unwrap()).unwrap();
        let mut sink = |_: &RoundEvent| {};
        round.step(&mut CorrectDecisions, &mut sink).unwrap();

        assert_eq!(
            round.step(&mut CorrectDecisions, &mut sink),
            Err(LottoError::RoundFinished)
        );
        assert_eq!(round.draws(), 0);
    }

    #[test]
    fn test_draws_match_numbers_taken_from_pool() {
        let mut round = Round::new(humans(2), DrawPool::from_sequence([88, 3, 40]).unwrap()).unwrap();
        let mut log = EventLog::new();
        let mut decisions = |_: &PlayerView<'_>, _: u8| false;

        while !round.step(&mut decisions, &mut log).unwrap().is_terminal() {
            assert_eq!(round.draws() as usize + round.pool().remaining(), 3);
        }

        let drawn: Vec<u8> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                RoundEvent::NumberDrawn { number, .. } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(drawn, vec![88, 3]);
        assert_eq!(round.outcome().unwrap().draws, 2);
        assert_eq!(round.pool().remaining(), 1);
    }

    #[test]
    fn test_elimination_of_one_of_two_is_attrition_win() {
        let mut round = Round::new(humans(2), DrawPool::from_sequence([3]).unwrap()).unwrap();
        let mut log = EventLog::new();
        // P0 owns 1..=15; saying "no" to 3 is a miss.
        let mut decisions = |view: &PlayerView<'_>, _: u8| view.name != "P0";

        let state = round.step(&mut decisions, &mut log).unwrap();

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        assert_eq!(state, RoundState::Won { winner: p1, reason: WinReason::Attrition });
        assert_eq!(round.player_status(p0), Some(PlayerStatus::Eliminated));
        assert_eq!(round.player_status(p1), Some(PlayerStatus::Active));
        assert!(log.events().contains(&RoundEvent::Missed {
            player: p0,
            number: 3,
            pos: CellPos::new(0, 2),
        }));
        // P1 was never asked: the round ended first.
        assert_eq!(log.for_player(p1).count(), 1);
        assert_eq!(round.outcome().unwrap().winner_name.as_deref(), Some("P1"));
    }

    #[test]
    fn test_false_strike_ends_two_player_round() {
        // The first false strike already leaves a sole survivor.
        let mut round = Round::new(humans(2), DrawPool::from_sequence([90]).unwrap()).unwrap();
        let mut always = |_: &PlayerView<'_>, _: u8| true;
        let state = round.step(&mut always, &mut |_: &RoundEvent| {}).unwrap();

        assert_eq!(state, RoundState::Won { winner: PlayerId::new(1), reason: WinReason::Attrition });
        assert_eq!(round.players()[1].move_count(), 0);
    }

    #[test]
    fn test_run_with_correct_humans_finishes() {
        let pool = DrawPool::new(&mut GameRng::new(8));
        let mut round = Round::new(humans(3), pool).unwrap();
        let outcome = round.run(&mut CorrectDecisions, &mut |_: &RoundEvent| {}).unwrap();

        let winner = outcome.winner.unwrap();
        assert_eq!(outcome.reason, Some(WinReason::CompletedCard));
        assert!(round.players()[winner.index()].card().is_complete());
        assert!(outcome.draws <= 90);
    }
}
