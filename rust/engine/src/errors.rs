use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Need at least 5 cards to evaluate, got {got}")]
    InsufficientCards { got: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Illegal action by seat {seat}: {reason}")]
    IllegalAction { seat: usize, reason: String },
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("No decision source for seat {seat}")]
    MissingDecisionSource { seat: usize },
    #[error("Not enough players with chips to start a hand: {funded}")]
    NotEnoughPlayers { funded: usize },
}

impl GameError {
    pub(crate) fn illegal(seat: usize, reason: impl Into<String>) -> Self {
        GameError::IllegalAction {
            seat,
            reason: reason.into(),
        }
    }
}
