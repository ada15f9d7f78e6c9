use serde::{Deserialize, Serialize};

use crate::hand::EvaluatedHand;

/// A main or side pot and the seats that can win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    /// Non-folded seats that contributed up to this pot's level, ascending
    pub eligible: Vec<usize>,
}

/// How one pot was paid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u32,
    pub winners: Vec<usize>,
    /// `(seat, chips)` per winner, odd chips included
    pub shares: Vec<(usize, u32)>,
}

/// Splits hand contributions into a main pot and side pots.
///
/// Pots are built per contribution level: each level collects what every seat put in
/// between the previous level and this one, and is contested only by non-folded seats
/// that reached it. Folded chips stay in the pots they reached. Neighbouring levels
/// with the same eligible seats are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    /// Builds pots for seats where nobody folded.
    pub fn from_contributions<C: AsRef<[u32]>>(contributions: C) -> Self {
        let contributions = contributions.as_ref();
        Self::build(contributions, &vec![false; contributions.len()])
    }

    pub fn build(contributions: &[u32], folded: &[bool]) -> Self {
        let mut levels: Vec<u32> = contributions.iter().copied().filter(|&c| c > 0).collect();
        levels.sort_unstable();
        levels.dedup();

        let mut pots: Vec<Pot> = Vec::new();
        let mut carry = 0u32;
        let mut prev = 0u32;
        for level in levels {
            let amount: u32 = contributions
                .iter()
                .map(|&c| c.min(level) - c.min(prev))
                .sum::<u32>()
                + carry;
            carry = 0;
            let eligible: Vec<usize> = contributions
                .iter()
                .enumerate()
                .filter(|&(seat, &c)| c >= level && !folded.get(seat).copied().unwrap_or(false))
                .map(|(seat, _)| seat)
                .collect();
            prev = level;

            match pots.last_mut() {
                // chips nobody live reached belong to the pot below
                Some(last) if eligible.is_empty() => last.amount += amount,
                None if eligible.is_empty() => carry = amount,
                Some(last) if last.eligible == eligible => last.amount += amount,
                _ => pots.push(Pot { amount, eligible }),
            }
        }
        if carry > 0 {
            // the only live seats put nothing in; they share what the folders left
            let eligible = (0..contributions.len())
                .filter(|&s| !folded.get(s).copied().unwrap_or(false))
                .collect();
            pots.push(Pot {
                amount: carry,
                eligible,
            });
        }
        Self { pots }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn into_pots(self) -> Vec<Pot> {
        self.pots
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map_or(0, |p| p.amount)
    }

    pub fn side_pots(&self) -> Vec<u32> {
        self.pots.iter().skip(1).map(|p| p.amount).collect()
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Awards every pot, main pot first.
    ///
    /// `hands[seat]` is the seat's evaluated showdown hand (`None` for folded or
    /// unevaluated seats). A pot with a single eligible seat goes to it without
    /// comparison. Ties split evenly; leftover chips go one at a time to the
    /// winners closest to the left of `button`.
    pub fn award(&self, hands: &[Option<EvaluatedHand>], button: usize) -> Vec<PotAward> {
        let seats = hands.len().max(1);
        self.pots
            .iter()
            .map(|pot| {
                let mut winners: Vec<usize> = if pot.eligible.len() == 1 {
                    pot.eligible.clone()
                } else {
                    let best = pot
                        .eligible
                        .iter()
                        .filter_map(|&s| hands.get(s).and_then(Option::as_ref))
                        .max();
                    pot.eligible
                        .iter()
                        .copied()
                        .filter(|&s| {
                            best.is_some() && hands.get(s).and_then(Option::as_ref) == best
                        })
                        .collect()
                };
                if winners.is_empty() {
                    // no comparable hands; share among everyone eligible
                    winners = pot.eligible.clone();
                }
                winners.sort_by_key(|&s| (s + seats - (button % seats) - 1) % seats);

                let n = winners.len() as u32;
                let share = pot.amount / n;
                let mut odd = pot.amount % n;
                let shares = winners
                    .iter()
                    .map(|&s| {
                        let extra = u32::from(odd > 0);
                        odd -= extra;
                        (s, share + extra)
                    })
                    .collect();
                winners.sort_unstable();
                PotAward {
                    amount: pot.amount,
                    winners,
                    shares,
                }
            })
            .collect()
    }
}
