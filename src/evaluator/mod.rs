pub(crate) mod rank_groups;

pub use rank_groups::RankGroups;

use crate::cards::{Card, Rank};
use crate::hand::PokerHand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest. The discriminant is the
/// category code reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Category code, 1 (high card) through 9 (straight flush).
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Display title, e.g. "Three of a Kind".
    pub const fn title(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Classification reached a grouping that five distinct cards cannot produce.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClassifyError {
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Classify five cards sorted by descending rank.
///
/// Dispatches on the number of distinct ranks: five distinct ranks can be a
/// straight and/or flush, fewer ranks mean matched sets. Straights do not wrap
/// around the Ace, so A-2-3-4-5 is a high card hand.
pub fn classify(cards_desc: &[Card; 5], groups: &RankGroups) -> Result<Category, ClassifyError> {
    let category = match groups.len() {
        5 => {
            let suit = cards_desc[0].suit();
            let is_flush = cards_desc.iter().all(|c| c.suit() == suit);
            let spread = cards_desc[0].numeric_rank().abs_diff(cards_desc[4].numeric_rank());
            let is_straight = spread == 4;
            match (is_flush, is_straight) {
                (true, true) => Category::StraightFlush,
                (true, false) => Category::Flush,
                (false, true) => Category::Straight,
                (false, false) => Category::HighCard,
            }
        }
        4 => Category::OnePair,
        3 if groups.has_count(3) => Category::ThreeOfAKind,
        3 => Category::TwoPair,
        2 if groups.has_count(4) => Category::FourOfAKind,
        2 => Category::FullHouse,
        n => {
            return Err(ClassifyError::InvariantViolation(format!(
                "five cards cannot form {n} distinct rank group(s)"
            )))
        }
    };
    Ok(category)
}

fn plural(rank: Option<Rank>) -> Result<String, ClassifyError> {
    rank.map(|r| format!("{}s", r.name()))
        .ok_or_else(|| ClassifyError::InvariantViolation("missing rank group".to_string()))
}

/// Narrative description of a classified hand, e.g. "Full house, Kings over 5s".
pub fn describe(
    category: Category,
    cards_desc: &[Card; 5],
    groups: &RankGroups,
) -> Result<String, ClassifyError> {
    let text = match category {
        Category::StraightFlush => {
            format!("Straight flush, {}-high", cards_desc[0].rank().name())
        }
        Category::Flush => "Flush".to_string(),
        Category::Straight => "Straight".to_string(),
        Category::HighCard => "High card".to_string(),
        Category::OnePair => format!("One pair of {}", plural(groups.largest())?),
        Category::TwoPair => {
            let pairs = groups.ranks_with_count(2);
            format!(
                "Two pair, {} and {}",
                plural(pairs.first().copied())?,
                plural(pairs.get(1).copied())?
            )
        }
        Category::ThreeOfAKind => format!("Three of a kind, {}", plural(groups.largest())?),
        Category::FourOfAKind => format!("Four of a kind, {}", plural(groups.largest())?),
        Category::FullHouse => format!(
            "Full house, {} over {}",
            plural(groups.largest())?,
            plural(groups.smallest())?
        ),
    };
    Ok(text)
}

/// The card rank that broke a tie between two hands of the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kicker(Rank);

impl Kicker {
    pub const fn rank(self) -> Rank {
        self.0
    }
}

impl fmt::Display for Kicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-high card", self.0.name())
    }
}

/// Outcome of comparing one hand against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub ordering: Ordering,
    pub kicker: Option<Kicker>,
}

impl Comparison {
    const fn decided(ordering: Ordering) -> Self {
        Self { ordering, kicker: None }
    }
}

/// Compare two classified hands.
///
/// Categories decide first. Within a category, matched sets are compared by
/// rank before falling back to a card-by-card comparison of both hands in
/// descending order. Only that card-by-card fallback reports a [`Kicker`], and
/// never for high card hands.
///
/// ```
/// use poker_showdown::evaluator::compare;
/// use poker_showdown::hand::PokerHand;
/// use std::cmp::Ordering;
///
/// let alice = PokerHand::try_new("Alice", &["2H", "3D", "5S", "5H", "KD"]).unwrap();
/// let bob = PokerHand::try_new("Bob", &["2D", "3H", "5C", "5D", "4H"]).unwrap();
/// let cmp = compare(&alice, &bob);
/// assert_eq!(cmp.ordering, Ordering::Greater);
/// assert_eq!(cmp.kicker.unwrap().to_string(), "King-high card");
/// ```
pub fn compare(a: &PokerHand, b: &PokerHand) -> Comparison {
    let category = a.category();
    match category.cmp(&b.category()) {
        Ordering::Equal => {}
        ordering => return Comparison::decided(ordering),
    }

    match category {
        Category::HighCard | Category::Straight | Category::Flush | Category::StraightFlush => {}
        Category::FullHouse | Category::FourOfAKind => {
            let ordering = a.groups().largest().cmp(&b.groups().largest());
            if ordering.is_ne() {
                return Comparison::decided(ordering);
            }
        }
        Category::OnePair | Category::TwoPair | Category::ThreeOfAKind => {
            let ours = a.groups().matched();
            let theirs = b.groups().matched();
            for (x, y) in ours.iter().zip(theirs.iter()) {
                let ordering = x.cmp(y);
                if ordering.is_ne() {
                    return Comparison::decided(ordering);
                }
            }
        }
    }

    compare_cards(category, a.cards_desc(), b.cards_desc())
}

fn compare_cards(category: Category, ours: &[Card; 5], theirs: &[Card; 5]) -> Comparison {
    for (x, y) in ours.iter().zip(theirs.iter()) {
        let ordering = x.cmp_rank(y);
        if ordering.is_eq() {
            continue;
        }
        let kicker = match category {
            Category::HighCard => None,
            _ => Some(Kicker(x.rank().max(y.rank()))),
        };
        return Comparison { ordering, kicker };
    }
    Comparison::decided(Ordering::Equal)
}
