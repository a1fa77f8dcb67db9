use poker_showdown::cards::Card;
use poker_showdown::deck::Deck;
use poker_showdown::evaluator::{compare, Category};
use poker_showdown::hand::PokerHand;
use proptest::prelude::*;
use std::cmp::Ordering;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), n).prop_shuffle()
}

/// Five distinct cards together with a reordering of the same cards.
fn hand_and_permutation() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    distinct_cards(5).prop_flat_map(|cards| {
        let shuffled = Just(cards.clone()).prop_shuffle();
        (Just(cards), shuffled)
    })
}

/// Two hands that share no card.
fn disjoint_hands() -> impl Strategy<Value = (PokerHand, PokerHand)> {
    distinct_cards(10).prop_map(|cards| {
        let a = PokerHand::from_cards("A", &cards[..5]).unwrap();
        let b = PokerHand::from_cards("B", &cards[5..]).unwrap();
        (a, b)
    })
}

proptest! {
    #[test]
    fn category_is_invariant_under_reordering((cards, shuffled) in hand_and_permutation()) {
        let a = PokerHand::from_cards("P", &cards).unwrap();
        let b = PokerHand::from_cards("P", &shuffled).unwrap();
        prop_assert_eq!(a.category(), b.category());
        prop_assert_eq!(a.description(), b.description());
        let ranks = |h: &PokerHand| h.cards_desc().map(|c| c.rank());
        prop_assert_eq!(ranks(&a), ranks(&b));
        prop_assert!((1..=9).contains(&a.category().code()));
    }

    #[test]
    fn hand_compared_with_itself_is_equal(cards in distinct_cards(5)) {
        let h = PokerHand::from_cards("P", &cards).unwrap();
        let cmp = compare(&h, &h);
        prop_assert_eq!(cmp.ordering, Ordering::Equal);
        prop_assert!(cmp.kicker.is_none());
    }

    #[test]
    fn comparison_is_antisymmetric((a, b) in disjoint_hands()) {
        let ab = compare(&a, &b);
        let ba = compare(&b, &a);
        prop_assert_eq!(ab.ordering, ba.ordering.reverse());
        prop_assert_eq!(ab.kicker, ba.kicker);
    }

    #[test]
    fn higher_category_always_wins((a, b) in disjoint_hands()) {
        let cmp = compare(&a, &b);
        if a.category() != b.category() {
            prop_assert_eq!(cmp.ordering, a.category().cmp(&b.category()));
            prop_assert!(cmp.kicker.is_none());
        } else if a.category() == Category::HighCard {
            prop_assert!(cmp.kicker.is_none());
        }
    }
}
