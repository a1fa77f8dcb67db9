use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// A standard 52-card deck, or what is left of one.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in picker order: faces 2..A, each in suits H, D, C, S.
    ///
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0].to_string(), "2H");
    /// ```
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// The standard deck minus `used`.
    pub fn without(used: &[Card]) -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|c| !used.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

/// Deal a random five-card hand that shares no card with `used`.
/// Returns `None` when fewer than five cards remain.
pub fn random_hand<R: Rng + ?Sized>(used: &[Card], rng: &mut R) -> Option<[Card; 5]> {
    let mut deck = Deck::without(used);
    deck.shuffle_with(rng);
    deck.draw_n(5).try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert_eq!(d.as_slice()[4].to_string(), "3H");
        assert_eq!(d.as_slice()[51].to_string(), "AS");
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        d2.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_with(&mut ChaCha8Rng::seed_from_u64(7));
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn without_removes_used_cards() {
        let used = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Two, Suit::Hearts)];
        let d = Deck::without(&used);
        assert_eq!(d.len(), 50);
        assert!(!d.contains(used[0]));
        assert!(d.contains(Card::new(Rank::Ace, Suit::Hearts)));
    }

    #[test]
    fn random_hand_avoids_used_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let used: Vec<Card> = Deck::standard().as_slice()[..47].to_vec();
        let hand = random_hand(&used, &mut rng).unwrap();
        let set: HashSet<Card> = hand.iter().copied().collect();
        assert_eq!(set.len(), 5);
        assert!(hand.iter().all(|c| !used.contains(c)));

        let used: Vec<Card> = Deck::standard().as_slice()[..48].to_vec();
        assert!(random_hand(&used, &mut rng).is_none());
    }
}
