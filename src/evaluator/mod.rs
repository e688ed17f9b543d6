pub(crate) mod detector;
pub(crate) mod flush;
pub(crate) mod groups;
pub(crate) mod pool;
pub(crate) mod straight;

use crate::cards::{parse_cards, Card};
use crate::hand::{Hand, HandError};
use crate::rules::RuleSet;
use log::{debug, trace, warn};
use pool::{CardPool, Draft};

/// Hand categories a rule set can list in its evaluation order.
///
/// Unlike a fixed ranking, the strength of a category comes from its
/// position in [`RuleSet::order`]: earlier entries are stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

impl Category {
    /// Display name, as it appears at the start of a hand description.
    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "Pair",
            Category::HighCard => "High Card",
        }
    }
}

/// Classify `cards` under `rules`.
///
/// Categories are tried in rule order and the first one that forms wins;
/// its strength is the number of categories from it to the end of the
/// order. Wild card assignments are cleared before every attempt.
///
/// ```
/// use poker_rank::cards::parse_cards;
/// use poker_rank::evaluator::{classify, Category};
/// use poker_rank::rules::RuleSet;
///
/// let cards = parse_cards("Ad As Jc Th 2d 3c Kd").unwrap();
/// let hand = classify(&cards, &RuleSet::standard()).unwrap();
/// assert_eq!(hand.kind(), Category::OnePair);
/// assert_eq!(hand.description(), "Pair, A's");
/// assert_eq!(hand.to_card_strings(), ["Ad", "As", "Kd", "Jc", "10h"]);
/// ```
pub fn classify(cards: &[Card], rules: &RuleSet) -> Result<Hand, HandError> {
    let pool = CardPool::build(cards, rules)?;
    let mut draft = Draft::new(&pool, rules);
    let count = rules.order.len();

    let found = rules.order.iter().enumerate().find_map(|(i, &kind)| {
        draft.reset();
        trace!("trying {kind:?} on {} cards", pool.len());
        kind.attempt(&mut draft).map(|formed| (kind, count - i, formed))
    });

    let (kind, strength, formed) = match found {
        Some(found) => found,
        None => {
            warn!(
                "no category in the '{}' order formed a hand; falling back to high card",
                rules.name
            );
            draft.reset();
            (Category::HighCard, 0, detector::high_card(&mut draft))
        }
    };
    debug!("classified as {} ({kind:?}, strength {strength})", formed.description);

    Ok(Hand {
        kind,
        name: formed.name,
        strength,
        cards: formed.picks.iter().map(|&pick| pool.played(pick)).collect(),
        pool: pool.cards().to_vec(),
        description: formed.description,
        rules: rules.clone(),
    })
}

/// Parse whitespace-separated card notation and classify it.
///
/// ```
/// use poker_rank::evaluator::classify_str;
/// use poker_rank::rules::RuleSet;
///
/// let hand = classify_str("Kh Kd Ks 2c 2d", &RuleSet::standard()).unwrap();
/// assert_eq!(hand.description(), "Full House, K's over 2's");
/// ```
pub fn classify_str(notation: &str, rules: &RuleSet) -> Result<Hand, HandError> {
    let cards = parse_cards(notation)?;
    classify(&cards, rules)
}
