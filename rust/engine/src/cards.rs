use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Canonical lowercase letter used in the two-character card form.
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn from_letter(c: char) -> Result<Suit, GameError> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(GameError::InvalidCard(format!("unknown suit '{c}'"))),
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        all_suits()
            .get(v as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidCard(format!("suit index {v} out of range 0..=3")))
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14). Counts as 1 only inside the wheel straight.
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_letter(c: char) -> Result<Rank, GameError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(GameError::InvalidCard(format!("unknown rank '{c}'"))),
        }
    }

    /// English name used in hand descriptions ("Ace", "Ten").
    pub fn name(self) -> &'static str {
        rank_name(self.value())
    }
}

impl TryFrom<u8> for Rank {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            2..=14 => Ok(all_ranks()[(v - 2) as usize]),
            _ => Err(GameError::InvalidCard(format!(
                "rank {v} out of range 2..=14"
            ))),
        }
    }
}

pub(crate) fn rank_name(v: u8) -> &'static str {
    match v {
        2 => "Two",
        3 => "Three",
        4 => "Four",
        5 => "Five",
        6 => "Six",
        7 => "Seven",
        8 => "Eight",
        9 => "Nine",
        10 => "Ten",
        11 => "Jack",
        12 => "Queen",
        13 => "King",
        _ => "Ace",
    }
}

/// Represents a single playing card with a rank and suit.
/// Cards are the fundamental unit of the poker game, used in player hands, the board, and the deck.
///
/// Ordering is by rank first, then suit. Suit never affects hand strength; it only makes
/// the order total so enumeration and display are deterministic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from a numeric rank (2..=14) and suit index (0..=3, clubs to spades).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCard`] when either value is out of range.
    pub fn try_from_values(rank: u8, suit: u8) -> Result<Self, GameError> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }

    /// Rank followed by suit symbol, e.g. `A♠`.
    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.letter(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses the canonical two-character form: rank from `23456789TJQKA`, suit from `cdhs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => Ok(Card {
                rank: Rank::from_letter(r)?,
                suit: Suit::from_letter(su)?,
            }),
            _ => Err(GameError::InvalidCard(format!(
                "'{s}' is not a two-character card"
            ))),
        }
    }
}

/// Parses a whitespace-separated list such as `"As Kd Th"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split_whitespace().map(str::parse).collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
