//! Card and draw pool invariants over many seeds.

use proptest::prelude::*;

use rust_lotto::card::Card;
use rust_lotto::core::{GameRng, MAX_NUMBER, NUMBERS_PER_CARD, NUMBERS_PER_ROW};
use rust_lotto::pool::DrawPool;

fn assert_card_invariants(card: &Card) -> Result<(), TestCaseError> {
    let mut numbers: Vec<u8> = card.numbers().collect();
    prop_assert_eq!(numbers.len(), NUMBERS_PER_CARD);

    for row in card.rows() {
        let populated: Vec<u8> = row.iter().filter_map(|c| c.number()).collect();
        prop_assert_eq!(populated.len(), NUMBERS_PER_ROW);
        prop_assert!(populated.windows(2).all(|w| w[0] < w[1]));
    }

    numbers.sort_unstable();
    numbers.dedup();
    prop_assert_eq!(numbers.len(), NUMBERS_PER_CARD);
    prop_assert!(numbers.iter().all(|&n| (1..=MAX_NUMBER).contains(&n)));
    Ok(())
}

proptest! {
    #[test]
    fn prop_generated_cards_are_valid(seed in any::<u64>()) {
        let card = Card::generate(&mut GameRng::new(seed));
        assert_card_invariants(&card)?;
        prop_assert_eq!(card.marked_count(), 0);
    }

    #[test]
    fn prop_cards_from_subsets_stay_in_subset(
        seed in any::<u64>(),
        supplied in prop::sample::subsequence((1..=MAX_NUMBER).collect::<Vec<u8>>(), 15..=90),
    ) {
        let card = Card::from_numbers(&supplied, &mut GameRng::new(seed)).unwrap();
        assert_card_invariants(&card)?;
        prop_assert!(card.numbers().all(|n| supplied.contains(&n)));
    }

    #[test]
    fn prop_locate_miss_is_repeatable(seed in any::<u64>(), strikes in 0usize..15) {
        let mut card = Card::generate(&mut GameRng::new(seed));
        let on_card: Vec<u8> = card.numbers().collect();
        let absent: Vec<u8> = (1..=MAX_NUMBER).filter(|n| !on_card.contains(n)).collect();

        for &n in on_card.iter().take(strikes) {
            for &miss in &absent {
                prop_assert_eq!(card.locate(miss), None);
            }
            let pos = card.locate(n).unwrap();
            card.mark(pos).unwrap();
        }

        for &miss in &absent {
            prop_assert_eq!(card.locate(miss), None);
        }
        prop_assert_eq!(card.marked_count(), strikes);
    }

    #[test]
    fn prop_pool_yields_each_number_once(seed in any::<u64>()) {
        let mut pool = DrawPool::new(&mut GameRng::new(seed));
        let mut drawn: Vec<u8> = (0..MAX_NUMBER).map(|_| pool.draw().unwrap()).collect();

        prop_assert_eq!(pool.draw(), None);
        prop_assert_eq!(pool.draw(), None);

        drawn.sort_unstable();
        prop_assert_eq!(drawn, (1..=MAX_NUMBER).collect::<Vec<u8>>());
    }
}

#[test]
fn test_cards_in_one_deal_differ() {
    let mut rng = GameRng::new(2024);
    let cards: Vec<Card> = (0..5).map(|_| Card::generate(&mut rng)).collect();

    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
