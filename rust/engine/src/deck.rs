use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck dealt from the top by advancing a position.
///
/// Cards before `position` have been dealt or burned; everything after is still
/// in the deck, so `remaining() + dealt_count() == 52` always holds.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a full deck in canonical order (clubs, diamonds, hearts, spades; Two..Ace).
    ///
    /// Without a seed a fresh one is drawn; it is kept so the shuffle stream can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            cards: full_deck(),
            position: 0,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restores all 52 cards and shuffles them. `Some(seed)` restarts the RNG stream.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.seed = seed;
            self.rng = ChaCha20Rng::seed_from_u64(seed);
        }
        self.reset();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    /// Deals `n` cards in order. Nothing is dealt if fewer than `n` remain.
    pub fn deal_many(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if self.remaining() < n {
            return Err(GameError::DeckExhausted);
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn burn(&mut self) {
        let _ = self.deal();
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn dealt_count(&self) -> usize {
        self.position
    }

    /// Cards dealt or burned so far, in dealing order.
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.position]
    }
}
