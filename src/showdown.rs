//! Comparing classified hands and picking winners.

use crate::evaluator::classify;
use crate::hand::{Hand, HandError};
use crate::rules::RuleSet;
use std::cmp::Ordering;

/// Number of leading cards compared once two hands have equal strength.
const COMPARED_CARDS: usize = 5;

/// Compare two hands. `Greater` means `a` beats `b`.
///
/// Strength decides first; equal strengths compare the selected cards
/// position by position, and the first differing rank decides. Positions
/// past the end of either hand are not compared.
///
/// ```
/// use poker_rank::evaluator::classify_str;
/// use poker_rank::rules::RuleSet;
/// use poker_rank::showdown::compare;
/// use std::cmp::Ordering;
///
/// let rules = RuleSet::standard();
/// let aces = classify_str("Ah Ad 9c 5s 2d", &rules).unwrap();
/// let kings = classify_str("Kh Kd Qc Js 9d", &rules).unwrap();
/// assert_eq!(compare(&aces, &kings), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    a.strength().cmp(&b.strength()).then_with(|| {
        a.cards()
            .iter()
            .zip(b.cards())
            .take(COMPARED_CARDS)
            .map(|(x, y)| x.rank_value().cmp(&y.rank_value()))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

impl Hand {
    /// `other` beats this hand.
    pub fn loses_to(&self, other: &Hand) -> bool {
        compare(self, other) == Ordering::Less
    }

    /// This hand ties or beats the rule set's lowest qualifying hand.
    /// Always true when the rule set has none.
    pub fn qualifies_high(&self) -> Result<bool, HandError> {
        Ok(meets(self, lowest_hand(self.rules())?.as_ref()))
    }
}

/// The rule set's lowest qualifying hand, classified.
fn lowest_hand(rules: &RuleSet) -> Result<Option<Hand>, HandError> {
    rules.lowest_qualifying.as_deref().map(|cards| classify(cards, rules)).transpose()
}

fn meets(hand: &Hand, lowest: Option<&Hand>) -> bool {
    lowest.map_or(true, |q| compare(hand, q) != Ordering::Less)
}

/// Hands that win a showdown; more than one means a split.
///
/// Hands that fail to qualify are dropped, then everything below the best
/// strength, then every hand that loses to another survivor.
///
/// ```
/// use poker_rank::evaluator::classify_str;
/// use poker_rank::rules::RuleSet;
/// use poker_rank::showdown::winners;
///
/// let rules = RuleSet::standard();
/// let hands = vec![
///     classify_str("Ah Ad 9c 5s 2d", &rules).unwrap(),
///     classify_str("As Ac 9d 5h 2c", &rules).unwrap(),
///     classify_str("Kh Qd 9h 5c 2s", &rules).unwrap(),
/// ];
/// assert_eq!(winners(&hands).unwrap().len(), 2);
/// ```
pub fn winners(hands: &[Hand]) -> Result<Vec<&Hand>, HandError> {
    // each distinct rule set's qualifier is classified once
    let mut lowest: Vec<(&RuleSet, Option<Hand>)> = Vec::new();
    let mut qualified = Vec::with_capacity(hands.len());
    for hand in hands {
        let at = match lowest.iter().position(|(rules, _)| *rules == hand.rules()) {
            Some(at) => at,
            None => {
                lowest.push((hand.rules(), lowest_hand(hand.rules())?));
                lowest.len() - 1
            }
        };
        if meets(hand, lowest[at].1.as_ref()) {
            qualified.push(hand);
        }
    }

    let Some(best) = qualified.iter().map(|h| h.strength()).max() else {
        return Ok(Vec::new());
    };
    qualified.retain(|h| h.strength() == best);

    let survivors: Vec<&Hand> = qualified
        .iter()
        .copied()
        .filter(|h| !qualified.iter().any(|other| h.loses_to(other)))
        .collect();
    Ok(survivors)
}
