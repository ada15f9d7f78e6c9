use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::pot::Pot;

/// Betting phase of a hand. Phases only move forward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, blinds posted
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands are compared and pots paid
    Showdown,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::PreFlop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards dealt when entering this phase.
    pub fn cards_dealt(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            Phase::PreFlop | Phase::Showdown => 0,
        }
    }
}

/// What an observer may see of one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: usize,
    pub stack: u32,
    pub bet_this_round: u32,
    pub committed: u32,
    pub folded: bool,
    pub all_in: bool,
    /// Present only for the seat the snapshot was taken for
    pub hole_cards: Option<[Card; 2]>,
}

/// Immutable snapshot of a table, produced after every transition.
///
/// Decision sources and renderers only ever see these copies, never the live table.
/// `pot` holds chips swept from finished betting rounds; chips bet in the current
/// round are in each player's `bet_this_round`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub hand_number: u64,
    pub phase: Phase,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_raise: u32,
    pub button: usize,
    pub to_act: Option<usize>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: Vec<PlayerView>,
    /// Main pot first, from chips committed so far
    pub pots: Vec<Pot>,
    pub hand_over: bool,
}

impl GameState {
    pub fn player(&self, seat: usize) -> Option<&PlayerView> {
        self.players.get(seat)
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.player(seat)
            .map_or(0, |p| self.current_bet.saturating_sub(p.bet_this_round))
    }

    /// Pot plus all chips bet in the current round.
    pub fn total_in_play(&self) -> u32 {
        self.pot + self.players.iter().map(|p| p.bet_this_round).sum::<u32>()
    }

    pub fn players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| !p.folded).count()
    }
}
