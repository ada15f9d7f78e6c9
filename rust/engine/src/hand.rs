use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{rank_name, Card, Suit};
use crate::errors::GameError;

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

/// Result of evaluating a hand: category plus tiebreak ranks.
///
/// Ordering is lexicographic over `(rank, tiebreak)`. The tiebreak shape is fixed per
/// category, so two hands of the same category always compare element by element.
/// `cards` is informational and does not take part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub rank: HandRank,
    // ordered high -> low
    pub tiebreak: Vec<u8>,
    pub cards: [Card; 5],
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl EvaluatedHand {
    /// Human-readable description, e.g. "Full House, Aces full of Kings".
    pub fn describe(&self) -> String {
        let t = |i: usize| rank_name(self.tiebreak.get(i).copied().unwrap_or(0));
        match self.rank {
            HandRank::RoyalFlush => "Royal Flush".to_string(),
            HandRank::StraightFlush => format!("Straight Flush, {}-high", t(0)),
            HandRank::FourOfAKind => format!("Four of a Kind, {}s", t(0)),
            HandRank::FullHouse => format!("Full House, {}s full of {}s", t(0), t(1)),
            HandRank::Flush => format!("Flush, {}-high", t(0)),
            HandRank::Straight => format!("Straight, {}-high", t(0)),
            HandRank::ThreeOfAKind => format!("Three of a Kind, {}s", t(0)),
            HandRank::TwoPair => format!("Two Pair, {}s and {}s", t(0), t(1)),
            HandRank::OnePair => format!("Pair of {}s", t(0)),
            HandRank::HighCard => format!("High Card, {}", t(0)),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Outcome of comparing two evaluated hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    AWins,
    BWins,
    Tie,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::AWins,
            Ordering::Less => Comparison::BWins,
            Ordering::Equal => Comparison::Tie,
        }
    }
}

pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Comparison {
    a.cmp(b).into()
}

/// Finds the best five-card hand among `cards` (normally 5 to 7 of them).
///
/// Every 5-card subset is scored with [`evaluate_five`] and the maximum is kept;
/// seven cards give 21 subsets.
///
/// # Errors
///
/// - [`GameError::InsufficientCards`] when fewer than five cards are supplied
/// - [`GameError::DuplicateCard`] when any card appears twice
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, HandRank};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2c 3d").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(best.rank, HandRank::RoyalFlush);
/// assert_eq!(best.tiebreak, vec![14]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    if cards.len() < 5 {
        return Err(GameError::InsufficientCards { got: cards.len() });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &c in cards {
        if !seen.insert(c) {
            return Err(GameError::DuplicateCard(c));
        }
    }

    let n = cards.len();
    let mut best: Option<EvaluatedHand> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let hand =
                            evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.as_ref().is_none_or(|cur| hand > *cur) {
                            best = Some(hand);
                        }
                    }
                }
            }
        }
    }
    // n >= 5 guarantees at least one subset
    best.ok_or(GameError::InsufficientCards { got: n })
}

/// Scores exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = all_same_suit(cards);
    let straight = straight_high(&ranks);

    let make = |rank: HandRank, tiebreak: Vec<u8>| EvaluatedHand {
        rank,
        tiebreak,
        cards: *cards,
    };

    if let (true, Some(high)) = (flush, straight) {
        return if high == 14 {
            make(HandRank::RoyalFlush, vec![14])
        } else {
            make(HandRank::StraightFlush, vec![high])
        };
    }

    // (count, rank) groups, biggest group first, then higher rank first
    let groups = rank_groups(&ranks);
    let pattern: Vec<u8> = groups.iter().map(|&(count, _)| count).collect();
    let by_group: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();

    match pattern.as_slice() {
        [4, 1] => make(HandRank::FourOfAKind, by_group),
        [3, 2] => make(HandRank::FullHouse, by_group),
        _ if flush => make(HandRank::Flush, ranks),
        _ if straight.is_some() => make(HandRank::Straight, straight.into_iter().collect()),
        [3, 1, 1] => make(HandRank::ThreeOfAKind, by_group),
        [2, 2, 1] => make(HandRank::TwoPair, by_group),
        [2, 1, 1, 1] => make(HandRank::OnePair, by_group),
        _ => make(HandRank::HighCard, ranks),
    }
}

fn all_same_suit(cards: &[Card; 5]) -> bool {
    let first: Suit = cards[0].suit;
    cards.iter().all(|c| c.suit == first)
}

fn rank_groups(sorted_desc: &[u8]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15]; // 2..14 used
    for &r in sorted_desc {
        counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

/// High card of a five-card straight, or `None`. The wheel (A-2-3-4-5) is 5-high.
fn straight_high(sorted_desc: &[u8]) -> Option<u8> {
    let mut mask: u16 = 0;
    for &r in sorted_desc {
        mask |= 1 << r;
    }
    if mask.count_ones() != 5 {
        return None;
    }
    // Ace also counts as 1
    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        mask & window == window
    })
}
