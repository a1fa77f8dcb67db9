use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card faces from Two (low) to Ace (high). The discriminant is the numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric rank, 2 through 14 with the Ace high.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Face symbol as it appears in a card token.
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Name used in hand descriptions: court cards and the Ace are spelled out.
    ///
    /// ```
    /// use poker_showdown::cards::Rank;
    ///
    /// assert_eq!(Rank::King.name(), "King");
    /// assert_eq!(Rank::Ten.name(), "10");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            other => other.symbol(),
        }
    }

    fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The four suits. Suits carry no ranking weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::Malformed(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card format: '{0}'")]
    Malformed(String),
}

/// A playing card: face + suit.
///
/// Equality and hashing use both face and suit, so two cards are the same card
/// only when they match on both. Strength comparisons go through
/// [`Card::cmp_rank`], which ignores the suit.
///
/// ```
/// use poker_showdown::cards::Card;
///
/// let card: Card = "10h".parse().unwrap();
/// assert_eq!(card.to_string(), "10H");
/// assert_eq!(card.numeric_rank(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn numeric_rank(self) -> u8 {
        self.rank.value()
    }

    /// Order two cards by numeric rank only.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses `(10|[2-9JQKA])([HDCS])` after trimming, ignoring letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CardParseError::Malformed(s.to_string());
        let t = s.trim();
        if !t.is_ascii() || !(2..=3).contains(&t.len()) {
            return Err(malformed());
        }
        let (face, suit) = t.split_at(t.len() - 1);
        let rank = Rank::from_symbol(face).ok_or_else(malformed)?;
        let suit = suit.chars().next().ok_or_else(malformed)?;
        let suit = Suit::try_from(suit).map_err(|_| malformed())?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_showdown::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10C").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

/// Render cards as a `", "`-joined sequence of canonical tokens.
pub fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_and_names() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Jack.name(), "Jack");
        assert_eq!(Rank::Queen.name(), "Queen");
        assert_eq!(Rank::Nine.name(), "9");
    }

    #[test]
    fn parses_every_face_and_suit() {
        let card = Card::from_str("2H").unwrap();
        assert_eq!(card.numeric_rank(), 2);
        assert_eq!(card.suit(), Suit::Hearts);

        let card = Card::from_str("10D").unwrap();
        assert_eq!(card.numeric_rank(), 10);
        assert_eq!(card.suit(), Suit::Diamonds);

        assert_eq!(Card::from_str("AS").unwrap().numeric_rank(), 14);
        assert_eq!(Card::from_str("KC").unwrap().numeric_rank(), 13);
        assert_eq!(Card::from_str("JH").unwrap().numeric_rank(), 11);
        assert_eq!(Card::from_str("QH").unwrap().numeric_rank(), 12);
    }

    #[test]
    fn trims_and_ignores_case() {
        let card = Card::from_str("  qs ").unwrap();
        assert_eq!(card, Card::new(Rank::Queen, Suit::Spades));
        assert_eq!(card.to_string(), "QS");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["10X", "1H", "11H", "TH", "H", "", "10", "AHH", "2 H", "♥A", "0H"] {
            assert!(
                matches!(Card::from_str(bad), Err(CardParseError::Malformed(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn every_rank_and_suit_parses_in_a_card() {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let token = format!("{}{}", rank.symbol(), suit.to_char().to_ascii_lowercase());
                assert_eq!(Card::from_str(&token), Ok(Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn canonical_form_round_trips() {
        for token in ["10H", "2C", "JD", "AS", "9S"] {
            assert_eq!(Card::from_str(token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn ordering_ignores_suit() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let as_ = Card::new(Rank::Ace, Suit::Spades);
        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(ah.cmp_rank(&as_), Ordering::Equal);
        assert_ne!(ah, as_);
        assert_eq!(ah.cmp_rank(&kd), Ordering::Greater);
    }

    #[test]
    fn parse_and_join_many() {
        let xs = parse_cards("AS, KD 10C").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(join_cards(&xs), "AS, KD, 10C");
        assert!(parse_cards("AS, KX").is_err());
    }
}
