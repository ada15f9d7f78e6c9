use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if nothing to call)
    Check,
    /// Call the current bet (capped at the remaining stack)
    Call,
    /// Raise so that this round's total bet becomes the given amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// One seat's chips, cards and betting status for the current hand.
///
/// The stack carries over between hands; everything else is cleared by
/// [`PlayerState::reset_for_hand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    seat: usize,
    stack: u32,
    hole: Option<[Card; 2]>,
    bet_this_round: u32,
    /// Chips put into the pot over the whole hand, blinds included
    committed: u32,
    folded: bool,
    all_in: bool,
}

impl PlayerState {
    pub fn new(seat: usize, stack: u32) -> Self {
        Self {
            seat,
            stack,
            hole: None,
            bet_this_round: 0,
            committed: 0,
            folded: false,
            all_in: false,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn bet_this_round(&self) -> u32 {
        self.bet_this_round
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Still holding cards and contesting the pot.
    pub fn in_hand(&self) -> bool {
        !self.folded
    }

    /// Can still be asked for a betting decision.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.stack > 0
    }

    /// Clears per-hand state. A seat without chips sits the hand out as folded.
    pub fn reset_for_hand(&mut self) {
        self.hole = None;
        self.bet_this_round = 0;
        self.committed = 0;
        self.all_in = false;
        self.folded = self.stack == 0;
    }

    pub fn give_cards(&mut self, cards: [Card; 2]) -> Result<(), GameError> {
        if self.hole.is_some() {
            return Err(GameError::illegal(self.seat, "hole cards already dealt"));
        }
        self.hole = Some(cards);
        Ok(())
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves `amount` from the stack into this round's bet; marks all-in at zero stack.
    pub fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::illegal(
                self.seat,
                format!("cannot commit {amount} with a stack of {}", self.stack),
            ));
        }
        self.stack -= amount;
        self.bet_this_round += amount;
        self.committed += amount;
        if self.stack == 0 {
            self.all_in = true;
        }
        Ok(())
    }

    /// Ends the betting round, returning the chips swept into the pot.
    pub fn sweep_bet(&mut self) -> u32 {
        std::mem::take(&mut self.bet_this_round)
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_chips_and_flags_all_in() {
        let mut p = PlayerState::new(0, 100);
        p.commit(40).unwrap();
        assert_eq!((p.stack(), p.bet_this_round(), p.committed()), (60, 40, 40));
        assert!(!p.is_all_in());
        p.commit(60).unwrap();
        assert!(p.is_all_in());
        assert!(!p.can_act());
        assert!(p.commit(1).is_err());
    }

    #[test]
    fn broke_player_sits_out() {
        let mut p = PlayerState::new(3, 0);
        p.reset_for_hand();
        assert!(p.is_folded());
    }
}
