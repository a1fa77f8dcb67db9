use crate::cards::{join_cards, Card, CardParseError};
use crate::evaluator::{self, Category, ClassifyError, Comparison, RankGroups};
use crate::showdown::Fault;
use std::collections::HashSet;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a poker hand must consist of exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

impl HandError {
    pub fn fault(&self) -> Fault {
        match self {
            HandError::Classify(_) => Fault::Server,
            _ => Fault::Client,
        }
    }
}

/// One player's five cards, classified once at construction.
///
/// ```
/// use poker_showdown::evaluator::Category;
/// use poker_showdown::hand::PokerHand;
///
/// let hand = PokerHand::try_new("Alice", &["2H", "2D", "2S", "5C", "5D"]).unwrap();
/// assert_eq!(hand.category(), Category::FullHouse);
/// assert_eq!(hand.description(), "Full house, 2s over 5s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokerHand {
    player: String,
    cards: [Card; 5],
    cards_desc: [Card; 5],
    groups: RankGroups,
    category: Category,
    description: String,
}

impl PokerHand {
    pub const SIZE: usize = 5;

    /// Parse five card tokens for `player`.
    pub fn try_new<S: AsRef<str>>(
        player: impl Into<String>,
        tokens: &[S],
    ) -> Result<Self, HandError> {
        if tokens.len() != Self::SIZE {
            return Err(HandError::InvalidHandSize(tokens.len()));
        }
        let cards =
            tokens.iter().map(|t| t.as_ref().parse::<Card>()).collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(player, &cards)
    }

    /// Build a hand from already parsed cards. The cards must be five distinct cards.
    pub fn from_cards(player: impl Into<String>, cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] =
            cards.try_into().map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        let mut seen = HashSet::with_capacity(Self::SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }

        // Stable sort: equal ranks keep their input order.
        let mut cards_desc = cards;
        cards_desc.sort_by(|a, b| b.cmp_rank(a));
        let groups = RankGroups::from_cards(&cards_desc);
        let category = evaluator::classify(&cards_desc, &groups)?;
        let description = evaluator::describe(category, &cards_desc, &groups)?;

        Ok(Self { player: player.into(), cards, cards_desc, groups, category, description })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Cards in the order they were supplied.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// Cards sorted by rank, highest first.
    pub fn cards_desc(&self) -> &[Card; 5] {
        &self.cards_desc
    }

    pub fn groups(&self) -> &RankGroups {
        &self.groups
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical card sequence, e.g. "KD, 9C, 5S, 3D, 2H".
    pub fn cards_text(&self) -> String {
        join_cards(&self.cards_desc)
    }

    /// Compare against another hand; see [`evaluator::compare`].
    pub fn compare(&self, other: &PokerHand) -> Comparison {
        evaluator::compare(self, other)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.player, self.cards_text())
    }
}
