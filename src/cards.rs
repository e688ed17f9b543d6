use std::fmt;
use std::str::FromStr;

/// Playing strength of a card, from the low ace (0) up to the ace (13).
///
/// `LowAce` never comes from notation: it is the strength an Ace plays at
/// when it completes a straight from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    LowAce = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
    Ace = 13,
}

impl Rank {
    /// Number of distinct strengths, low ace included.
    pub const COUNT: usize = 14;

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::LowAce,
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

    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub fn from_strength(strength: u8) -> Option<Rank> {
        Rank::ALL.get(strength as usize).copied()
    }

    /// The next strength up, if any.
    pub fn above(self) -> Option<Rank> {
        Rank::from_strength(self.strength() + 1)
    }

    /// The next strength down, if any.
    pub fn below(self) -> Option<Rank> {
        self.strength().checked_sub(1).and_then(Rank::from_strength)
    }

    /// Printed symbol; tens render as `10` and both aces as `A`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::LowAce | Rank::Ace => "A",
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
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid face: '{0}'")]
    Invalid(String),
}

/// The face printed on a card: one of the thirteen ranks or a joker.
///
/// Whether a face is wild is decided by the [`RuleSet`](crate::rules::RuleSet),
/// not by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Face {
    /// Every face except the joker, Two first.
    pub const NATURAL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    /// Natural strength of the face; jokers have none.
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Face::Two => Some(Rank::Two),
            Face::Three => Some(Rank::Three),
            Face::Four => Some(Rank::Four),
            Face::Five => Some(Rank::Five),
            Face::Six => Some(Rank::Six),
            Face::Seven => Some(Rank::Seven),
            Face::Eight => Some(Rank::Eight),
            Face::Nine => Some(Rank::Nine),
            Face::Ten => Some(Rank::Ten),
            Face::Jack => Some(Rank::Jack),
            Face::Queen => Some(Rank::Queen),
            Face::King => Some(Rank::King),
            Face::Ace => Some(Rank::Ace),
            Face::Joker => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self.rank() {
            Some(rank) => rank.symbol(),
            None => "O",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Face {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Face::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::try_from(c),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Face {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Face::Two),
            '3' => Ok(Face::Three),
            '4' => Ok(Face::Four),
            '5' => Ok(Face::Five),
            '6' => Ok(Face::Six),
            '7' => Ok(Face::Seven),
            '8' => Ok(Face::Eight),
            '9' => Ok(Face::Nine),
            'T' => Ok(Face::Ten),
            'J' => Ok(Face::Jack),
            'Q' => Ok(Face::Queen),
            'K' => Ok(Face::King),
            'A' => Ok(Face::Ace),
            'O' => Ok(Face::Joker),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: face + suit. Cards never change once built; the rank a
/// wild card plays as lives in the classified hand.
///
/// ```
/// use poker_rank::cards::{Card, Face, Suit};
///
/// let card: Card = "Th".parse().unwrap();
/// assert_eq!(card, Card::new(Face::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "10h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    face: Face,
    suit: Suit,
}

impl Card {
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Natural strength, `None` for jokers.
    pub const fn rank(self) -> Option<Rank> {
        self.face.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Face(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // face is everything but the last char ("10" or a single symbol)
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let face = Face::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(face, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_rank::cards::{parse_cards, Card, Face, Suit};
///
/// let cards = parse_cards("As, Kd 10c Oh").unwrap();
/// assert_eq!(cards[0], Card::new(Face::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Face::Ten, Suit::Clubs));
/// assert_eq!(cards[3], Card::new(Face::Joker, Suit::Hearts));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
