//! poker-rank: configurable poker hand classification
//!
//! Goals:
//! - Classify any number of cards into the best hand a rule set allows
//! - Game variants as data: hand size, category order, wild cards, wheel, qualifiers
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify and compare
//! ```
//! use poker_rank::evaluator::{classify_str, Category};
//! use poker_rank::rules::RuleSet;
//! use poker_rank::showdown::winners;
//!
//! let rules = RuleSet::standard();
//! let a = classify_str("Ad As Jc Th 2d 3c Kd", &rules).unwrap();
//! let b = classify_str("Qh Qd Qs 2c 5h 8d 9s", &rules).unwrap();
//! assert_eq!(a.kind(), Category::OnePair);
//! assert_eq!(b.description(), "Three of a Kind, Q's");
//!
//! let hands = vec![a, b];
//! let won = winners(&hands).unwrap();
//! assert_eq!(won.len(), 1);
//! assert_eq!(won[0].kind(), Category::ThreeOfAKind);
//! ```
//!
//! ## Wild cards
//! ```
//! use poker_rank::evaluator::classify_str;
//! use poker_rank::rules::RuleSet;
//!
//! let hand = classify_str("2h 2c Ks Kd 7h", &RuleSet::named("deuceswild")).unwrap();
//! assert_eq!(hand.description(), "Four of a Kind, K's");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-rank -- --game paigow "As 2d 3h 4s 5c" "Oh Kd Ks 9c 9d"
//! ```

pub mod cards;
pub mod evaluator;
pub mod hand;
pub mod rules;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
