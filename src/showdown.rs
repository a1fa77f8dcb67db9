//! Head-to-head evaluation of two hands and the request/response types a
//! client exchanges with it.

use crate::cards::Card;
use crate::evaluator::{Category, Kicker};
use crate::hand::{HandError, PokerHand};
use core::cmp::Ordering;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Winner reported when neither hand is stronger.
pub const TIE: &str = "Tie";

/// Message reported in place of internal failures.
pub const GENERIC_FAULT_MESSAGE: &str = "An error occurred.";

/// Who is to blame for a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Malformed input; the error message is safe to show.
    Client,
    /// A defect in the evaluator; details stay internal.
    Server,
}

impl Fault {
    /// Process exit status for a failed command-line evaluation.
    pub const fn exit_code(self) -> u8 {
        match self {
            Fault::Client => 2,
            Fault::Server => 1,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("duplicate cards detected across hands: {0}")]
    DuplicateAcrossHands(Card),
    #[error("player names cannot be empty")]
    MissingPlayerName,
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl ShowdownError {
    pub fn fault(&self) -> Fault {
        match self {
            ShowdownError::Hand(err) => err.fault(),
            _ => Fault::Client,
        }
    }

    /// Message suitable for the caller: the reason for client faults, a
    /// generic message for server faults.
    pub fn public_message(&self) -> String {
        match self.fault() {
            Fault::Client => self.to_string(),
            Fault::Server => GENERIC_FAULT_MESSAGE.to_string(),
        }
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Winning player's name, or [`TIE`].
    pub winner: String,
    /// Winning cards, or both players' cards on a tie.
    pub hand: String,
    /// Winning category code, 1-9.
    pub rank: u8,
    /// Narrative of the winning hand; empty on a tie.
    pub hand_eval: String,
}

impl Verdict {
    pub fn is_tie(&self) -> bool {
        self.winner == TIE
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_code(self.rank)
    }

    fn decisive(winner: &PokerHand, kicker: Option<Kicker>) -> Self {
        let hand_eval = match kicker {
            Some(kicker) => format!("{} with {kicker}", winner.description()),
            None => winner.description().to_string(),
        };
        Self {
            winner: winner.player().to_string(),
            hand: winner.cards_text(),
            rank: winner.category().code(),
            hand_eval,
        }
    }

    fn tie(first: &PokerHand, second: &PokerHand) -> Self {
        Self {
            winner: TIE.to_string(),
            hand: format!("{first} vs {second}"),
            rank: first.category().code(),
            hand_eval: String::new(),
        }
    }
}

/// Decide between two hands.
///
/// Fails if a card appears in both hands or if either player is unnamed.
///
/// ```
/// use poker_showdown::hand::PokerHand;
/// use poker_showdown::showdown::evaluate;
///
/// let alice = PokerHand::try_new("Alice", &["2H", "3D", "5S", "5H", "KD"]).unwrap();
/// let bob = PokerHand::try_new("Bob", &["2D", "3H", "5C", "5D", "4H"]).unwrap();
/// let verdict = evaluate(&alice, &bob).unwrap();
/// assert_eq!(verdict.winner, "Alice");
/// assert_eq!(verdict.hand_eval, "One pair of 5s with King-high card");
/// ```
pub fn evaluate(first: &PokerHand, second: &PokerHand) -> Result<Verdict, ShowdownError> {
    let mut seen = HashSet::with_capacity(PokerHand::SIZE * 2);
    for card in first.cards().iter().chain(second.cards()) {
        if !seen.insert(*card) {
            return Err(ShowdownError::DuplicateAcrossHands(*card));
        }
    }
    if first.player().trim().is_empty() || second.player().trim().is_empty() {
        return Err(ShowdownError::MissingPlayerName);
    }

    let cmp = first.compare(second);
    let verdict = match cmp.ordering {
        Ordering::Greater => Verdict::decisive(first, cmp.kicker),
        Ordering::Less => Verdict::decisive(second, cmp.kicker),
        Ordering::Equal => Verdict::tie(first, second),
    };
    debug!("{first} vs {second}: winner={} rank={}", verdict.winner, verdict.rank);
    Ok(verdict)
}

/// One player's submission: a name and five card tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub cards: Vec<String>,
}

impl PlayerHand {
    pub fn new<I, S>(player: impl Into<String>, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { player: player.into(), cards: cards.into_iter().map(Into::into).collect() }
    }

    pub fn to_hand(&self) -> Result<PokerHand, HandError> {
        PokerHand::try_new(self.player.as_str(), self.cards.as_slice())
    }
}

/// Request body: `{ "hand1": {..}, "hand2": {..} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRequest {
    pub hand1: PlayerHand,
    pub hand2: PlayerHand,
}

impl HandRequest {
    pub fn new(hand1: PlayerHand, hand2: PlayerHand) -> Self {
        Self { hand1, hand2 }
    }

    /// Parse a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, ShowdownError> {
        serde_json::from_str(body).map_err(|err| {
            warn!("rejected request body: {err}");
            ShowdownError::MalformedRequest(err.to_string())
        })
    }

    /// Parse both hands and evaluate them. The first error encountered is returned.
    pub fn evaluate(&self) -> Result<Verdict, ShowdownError> {
        let result = self
            .hand1
            .to_hand()
            .and_then(|first| Ok((first, self.hand2.to_hand()?)))
            .map_err(ShowdownError::from)
            .and_then(|(first, second)| evaluate(&first, &second));
        if let Err(err) = &result {
            if err.fault() == Fault::Server {
                error!("evaluation failed: {err}");
            }
        }
        result
    }
}
