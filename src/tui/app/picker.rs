use crate::cards::{Card, Rank, Suit};
use crate::deck::random_hand;

use super::{AppState, HAND_SIZE};

const COLUMNS: usize = Rank::ALL.len();
const ROWS: usize = Suit::ALL.len();

impl AppState {
    /// Card under the picker cursor.
    pub fn cursor_card(&self) -> Card {
        let (col, row) = self.cursor;
        Card::new(Rank::ALL[col % COLUMNS], Suit::ALL[row % ROWS])
    }

    /// Card in the active slot, if any.
    pub fn slot_card(&self) -> Option<Card> {
        self.hands[self.slot.hand].cards[self.slot.card]
    }

    /// True if `card` sits in any slot other than the active one.
    pub fn is_used_elsewhere(&self, card: Card) -> bool {
        self.hands.iter().enumerate().any(|(h, hand)| {
            hand.cards
                .iter()
                .enumerate()
                .any(|(i, c)| *c == Some(card) && (h, i) != (self.slot.hand, self.slot.card))
        })
    }

    pub(crate) fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (col, row) = self.cursor;
        let col = (col as isize + dx).rem_euclid(COLUMNS as isize) as usize;
        let row = (row as isize + dy).rem_euclid(ROWS as isize) as usize;
        self.cursor = (col, row);
    }

    /// Put the cursor card into the active slot and advance to the next slot.
    pub(crate) fn place_card(&mut self) -> bool {
        let card = self.cursor_card();
        if self.is_used_elsewhere(card) {
            self.set_error(format!("{card} is already in use"));
            return false;
        }
        self.hands[self.slot.hand].cards[self.slot.card] = Some(card);
        self.slot = self.slot.next();
        self.clear_error();
        true
    }

    pub(crate) fn clear_slot(&mut self) -> bool {
        self.hands[self.slot.hand].cards[self.slot.card].take().is_some()
    }

    /// Fill hand `idx` with random cards not held by the other hand.
    pub(crate) fn randomize_hand(&mut self, idx: usize) -> bool {
        let other: Vec<Card> = self.hands[1 - idx].placed().collect();
        match random_hand(&other, &mut self.rng) {
            Some(cards) => {
                self.hands[idx].cards = cards.map(Some);
                self.clear_error();
                true
            }
            None => {
                self.set_error("Not enough cards left in the deck");
                false
            }
        }
    }

    pub(crate) fn reset_hand(&mut self, idx: usize) {
        self.hands[idx].cards = [None; HAND_SIZE];
        self.slot.card = 0;
    }
}
