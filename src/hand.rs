use crate::cards::{Card, CardParseError, Rank};
use crate::evaluator::Category;
use crate::rules::RuleSet;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("card {0} has no rank and is not wild")]
    UnrankedCard(Card),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// A card as it plays inside a classified hand.
///
/// Natural cards always carry their rank (an Ace finishing a low straight
/// plays as [`Rank::LowAce`]). Wild cards carry the rank they were assigned,
/// or `None` once reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedCard {
    card: Card,
    rank: Option<Rank>,
    wild: bool,
}

impl PlayedCard {
    pub(crate) const fn new(card: Card, rank: Option<Rank>, wild: bool) -> Self {
        Self { card, rank, wild }
    }

    pub const fn card(self) -> Card {
        self.card
    }

    pub const fn rank(self) -> Option<Rank> {
        self.rank
    }

    /// Numeric rank used for comparison; -1 for an unresolved wild.
    pub fn rank_value(self) -> i8 {
        self.rank.map_or(-1, |r| r.strength() as i8)
    }

    pub const fn is_wild(self) -> bool {
        self.wild
    }

    /// The symbol the card plays as (`10` for tens).
    pub fn symbol(self) -> &'static str {
        match self.rank {
            Some(rank) => rank.symbol(),
            None => self.card.face().symbol(),
        }
    }
}

impl fmt::Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.card.suit())
    }
}

/// The best hand a set of cards forms under a [`RuleSet`].
///
/// ```
/// use poker_rank::cards::parse_cards;
/// use poker_rank::evaluator::{classify, Category};
/// use poker_rank::rules::RuleSet;
///
/// let cards = parse_cards("Kh Kd Ks 2c 2d").unwrap();
/// let hand = classify(&cards, &RuleSet::standard()).unwrap();
/// assert_eq!(hand.kind(), Category::FullHouse);
/// assert_eq!(hand.description(), "Full House, K's over 2's");
/// assert_eq!(hand.to_string(), "Kh, Kd, Ks, 2c, 2d");
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    pub(crate) kind: Category,
    pub(crate) name: &'static str,
    pub(crate) strength: usize,
    pub(crate) cards: Vec<PlayedCard>,
    pub(crate) pool: Vec<Card>,
    pub(crate) description: String,
    pub(crate) rules: RuleSet,
}

impl Hand {
    /// The evaluator that formed this hand.
    pub fn kind(&self) -> Category {
        self.kind
    }

    /// Category label, e.g. "Full House" or "Royal Flush".
    pub fn name(&self) -> &str {
        self.name
    }

    /// Position of the evaluator in the rule order; higher is stronger.
    pub fn strength(&self) -> usize {
        self.strength
    }

    /// Selected cards: pattern cards first, then kickers.
    pub fn cards(&self) -> &[PlayedCard] {
        &self.cards
    }

    /// Every input card, highest natural rank first and wild cards last.
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rendered selected cards, e.g. `["10h", "9h", ...]`.
    pub fn to_card_strings(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }

    /// Forget every wild assignment; wild cards go back to rank -1.
    pub fn reset_wilds(&mut self) {
        for card in self.cards.iter_mut().filter(|c| c.wild) {
            card.rank = None;
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_card_strings().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Face, Suit};

    #[test]
    fn played_card_renders_resolved_symbol() {
        let joker = Card::new(Face::Joker, Suit::Hearts);
        let played = PlayedCard::new(joker, Some(Rank::Ten), true);
        assert_eq!(played.to_string(), "10h");
        assert_eq!(played.rank_value(), 9);

        let unresolved = PlayedCard::new(joker, None, true);
        assert_eq!(unresolved.to_string(), "Oh");
        assert_eq!(unresolved.rank_value(), -1);
    }

    #[test]
    fn low_ace_still_renders_as_ace() {
        let ace = Card::new(Face::Ace, Suit::Clubs);
        let played = PlayedCard::new(ace, Some(Rank::LowAce), false);
        assert_eq!(played.to_string(), "Ac");
        assert_eq!(played.rank_value(), 0);
    }
}
