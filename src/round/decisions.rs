//! Where human answers come from.

use crate::player::PlayerView;

/// Supplies "strike this number?" answers for human players.
///
/// Only consulted for human players; automated players decide on their own.
/// Implemented for any `FnMut(&PlayerView<'_>, u8) -> bool`.
pub trait DecisionSource {
    fn decide(&mut self, player: &PlayerView<'_>, number: u8) -> bool;
}

impl<F> DecisionSource for F
where
    F: FnMut(&PlayerView<'_>, u8) -> bool,
{
    fn decide(&mut self, player: &PlayerView<'_>, number: u8) -> bool {
        self(player, number)
    }
}

/// Always gives the right answer by reading the player's card.
#[derive(Clone, Copy, Debug, Default)]
pub struct CorrectDecisions;

impl DecisionSource for CorrectDecisions {
    fn decide(&mut self, player: &PlayerView<'_>, number: u8) -> bool {
        player.card.locate(number).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::player::Player;

    fn player() -> Player {
        let card = Card::from_layout([
            [1, 2, 3, 4, 5, 0, 0, 0, 0],
            [6, 7, 8, 9, 10, 0, 0, 0, 0],
            [11, 12, 13, 14, 15, 0, 0, 0, 0],
        ])
        .unwrap();
        Player::human("Ann", card)
    }

    #[test]
    fn test_correct_decisions() {
        let player = player();
        let mut source = CorrectDecisions;
        assert!(source.decide(&player.view(), 3));
        assert!(!source.decide(&player.view(), 33));
    }

    #[test]
    fn test_closure_source() {
        let player = player();
        let mut asked = Vec::new();
        let mut source = |view: &PlayerView<'_>, number: u8| {
            asked.push((view.name.to_string(), number));
            false
        };
        assert!(!source.decide(&player.view(), 3));
        assert_eq!(asked, vec![("Ann".to_string(), 3)]);
    }
}
