//! poker-showdown: five-card poker hand classification and head-to-head comparison
//!
//! Goals:
//! - Classify a five-card hand into one of nine categories with a readable description
//! - Decide between two hands, naming the card that broke a tie
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: decide between two hands
//! ```
//! use poker_showdown::showdown::{HandRequest, PlayerHand};
//!
//! let request = HandRequest::new(
//!     PlayerHand::new("Alice", ["2H", "3D", "5S", "5H", "KD"]),
//!     PlayerHand::new("Bob", ["2D", "3H", "5C", "5D", "4H"]),
//! );
//! let verdict = request.evaluate().unwrap();
//! assert_eq!(verdict.winner, "Alice");
//! assert_eq!(verdict.rank, 2);
//! assert_eq!(verdict.hand_eval, "One pair of 5s with King-high card");
//! ```
//!
//! ## TUI
//! Assemble two hands interactively with:
//! ```sh
//! cargo run --bin poker-showdown
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
