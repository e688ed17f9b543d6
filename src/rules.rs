use crate::cards::{Card, Face, Suit};
use crate::evaluator::Category;
use log::debug;

/// How an unmatched wild card may stand in for other cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildPolicy {
    /// Fully wild: completes any group, straight or flush.
    Natural,
    /// Only counts as an Ace, or completes a straight or flush (the pai gow "bug").
    AceOnly,
}

/// Whether A-2-3-4-5 is ranked as an alternate straight of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelPolicy {
    /// The wheel is tried first and plays Ace-high, ranking just below Broadway.
    Enabled,
    /// The wheel is the lowest straight, 5-high.
    Disabled,
}

/// Game rules consumed by the classifier.
///
/// ```
/// use poker_rank::rules::RuleSet;
///
/// let rules = RuleSet::named("jacksbetter");
/// assert_eq!(rules.cards_per_hand, 5);
/// assert!(rules.lowest_qualifying.is_some());
/// assert_eq!(RuleSet::named("no-such-game"), RuleSet::standard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub name: String,
    pub cards_per_hand: usize,
    /// Evaluators from strongest to weakest.
    pub order: Vec<Category>,
    pub wild: Option<Face>,
    pub wild_policy: WildPolicy,
    pub wheel: WheelPolicy,
    /// Minimum run length for a straight or flush.
    pub qualify_length: usize,
    pub lowest_qualifying: Option<Vec<Card>>,
    pub suppress_kickers: bool,
}

const STANDARD_ORDER: [Category; 9] = [
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::OnePair,
    Category::HighCard,
];

/// Names accepted by [`RuleSet::named`].
const NAMES: [&str; 6] = ["standard", "jacksbetter", "deuceswild", "paigow", "threecard", "fourcard"];

impl RuleSet {
    /// Five-card poker, no wild cards.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            cards_per_hand: 5,
            order: STANDARD_ORDER.to_vec(),
            wild: None,
            wild_policy: WildPolicy::Natural,
            wheel: WheelPolicy::Disabled,
            qualify_length: 5,
            lowest_qualifying: None,
            suppress_kickers: false,
        }
    }

    /// Look up a rule set by name, falling back to `standard` for unknown names.
    pub fn named(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Self::standard(),
            "jacksbetter" => Self {
                name: "jacksbetter".to_string(),
                lowest_qualifying: Some(vec![
                    Card::new(Face::Jack, Suit::Clubs),
                    Card::new(Face::Jack, Suit::Diamonds),
                    Card::new(Face::Four, Suit::Hearts),
                    Card::new(Face::Three, Suit::Spades),
                    Card::new(Face::Two, Suit::Clubs),
                ]),
                suppress_kickers: true,
                ..Self::standard()
            },
            "deuceswild" => {
                let mut order = vec![Category::RoyalFlush];
                order.extend(STANDARD_ORDER);
                Self {
                    name: "deuceswild".to_string(),
                    order,
                    wild: Some(Face::Two),
                    ..Self::standard()
                }
            }
            "paigow" => Self {
                name: "paigow".to_string(),
                wild: Some(Face::Joker),
                wild_policy: WildPolicy::AceOnly,
                wheel: WheelPolicy::Enabled,
                ..Self::standard()
            },
            "threecard" => Self {
                name: "threecard".to_string(),
                cards_per_hand: 3,
                order: vec![
                    Category::StraightFlush,
                    Category::ThreeOfAKind,
                    Category::Straight,
                    Category::Flush,
                    Category::OnePair,
                    Category::HighCard,
                ],
                qualify_length: 3,
                lowest_qualifying: Some(vec![
                    Card::new(Face::Queen, Suit::Hearts),
                    Card::new(Face::Three, Suit::Spades),
                    Card::new(Face::Two, Suit::Clubs),
                ]),
                ..Self::standard()
            },
            "fourcard" => Self {
                name: "fourcard".to_string(),
                cards_per_hand: 4,
                order: vec![
                    Category::FourOfAKind,
                    Category::StraightFlush,
                    Category::ThreeOfAKind,
                    Category::Flush,
                    Category::Straight,
                    Category::TwoPair,
                    Category::OnePair,
                    Category::HighCard,
                ],
                qualify_length: 4,
                ..Self::standard()
            },
            other => {
                debug!("unknown rule set '{other}', using standard");
                Self::standard()
            }
        }
    }

    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    /// Whether `face` is wild under these rules.
    pub fn is_wild(&self, face: Face) -> bool {
        self.wild == Some(face)
    }

    /// Identical cards are only rejected when nothing is wild.
    pub fn forbids_duplicates(&self) -> bool {
        self.wild.is_none()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
