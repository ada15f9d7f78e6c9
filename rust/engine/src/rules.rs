use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Inclusive range of legal raise-to totals for this betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseRange {
    pub min_to: u32,
    pub max_to: u32,
}

/// The legal actions for one player at one decision point.
///
/// Amounts are chips added from the stack, except the raise range, which is
/// expressed as the round total the raise brings the player to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    pub seat: usize,
    pub to_call: u32,
    pub fold: bool,
    pub check: bool,
    pub call: Option<u32>,
    pub raise: Option<RaiseRange>,
    pub all_in: Option<u32>,
}

impl LegalActions {
    pub fn can(&self, action: A) -> bool {
        validate_action(self, action).is_ok()
    }

    /// One concrete action per legal kind, raising to the minimum.
    pub fn to_vec(&self) -> Vec<A> {
        let mut v = Vec::with_capacity(5);
        if self.fold {
            v.push(A::Fold);
        }
        if self.check {
            v.push(A::Check);
        }
        if self.call.is_some() {
            v.push(A::Call);
        }
        if let Some(r) = self.raise {
            v.push(A::Raise(r.min_to));
        }
        if self.all_in.is_some() {
            v.push(A::AllIn);
        }
        v
    }
}

/// What an accepted action does to the acting player's chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips added to match the current bet
    Call(u32),
    /// Raise to `to`, adding `added` chips
    Raise { to: u32, added: u32 },
    /// Whole remaining stack
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips_added(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { added, .. } => added,
        }
    }
}

/// Derives the legal action set from the betting state of one player.
///
/// # Arguments
///
/// * `seat` - The acting seat
/// * `stack` - Chips behind
/// * `bet_this_round` - Chips the player already put in this round
/// * `current_bet` - Highest round total outstanding
/// * `min_raise` - Minimum raise increment over `current_bet`
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::legal_actions;
///
/// // Facing a bet of 20 with 5 already in and 100 behind
/// let legal = legal_actions(0, 100, 5, 20, 10);
/// assert!(!legal.check);
/// assert_eq!(legal.call, Some(15));
/// assert_eq!(legal.raise.map(|r| (r.min_to, r.max_to)), Some((30, 105)));
/// ```
pub fn legal_actions(
    seat: usize,
    stack: u32,
    bet_this_round: u32,
    current_bet: u32,
    min_raise: u32,
) -> LegalActions {
    let to_call = current_bet.saturating_sub(bet_this_round);
    let raise = (stack > 0 && stack >= to_call.saturating_add(min_raise)).then(|| RaiseRange {
        min_to: current_bet.saturating_add(min_raise),
        max_to: bet_this_round + stack,
    });
    LegalActions {
        seat,
        to_call,
        fold: true,
        check: to_call == 0,
        call: (stack > 0 && to_call > 0).then(|| to_call.min(stack)),
        raise,
        all_in: (stack > 0).then_some(stack),
    }
}

/// Checks an action against the legal set and resolves its chip amounts.
///
/// # Errors
///
/// Returns [`GameError::IllegalAction`] when the action is not in `legal`,
/// including raises outside the legal raise-to range.
///
/// ```
/// use holdem_engine::rules::{legal_actions, validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let legal = legal_actions(1, 50, 0, 80, 20);
/// // Calling for less than the bet puts the whole stack in
/// assert_eq!(validate_action(&legal, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
/// assert!(validate_action(&legal, PlayerAction::Check).is_err());
/// assert!(validate_action(&legal, PlayerAction::Raise(100)).is_err());
/// ```
pub fn validate_action(legal: &LegalActions, action: A) -> Result<ValidatedAction, GameError> {
    let seat = legal.seat;
    match action {
        A::Fold if legal.fold => Ok(ValidatedAction::Fold),
        A::Check if legal.check => Ok(ValidatedAction::Check),
        A::Check => Err(GameError::illegal(
            seat,
            format!("cannot check facing {} to call", legal.to_call),
        )),
        A::Call => legal
            .call
            .map(ValidatedAction::Call)
            .ok_or_else(|| GameError::illegal(seat, "nothing to call")),
        A::Raise(to) => {
            let range = legal
                .raise
                .ok_or_else(|| GameError::illegal(seat, "raising is not allowed"))?;
            if to < range.min_to || to > range.max_to {
                return Err(GameError::illegal(
                    seat,
                    format!(
                        "raise to {to} outside legal range {}..={}",
                        range.min_to, range.max_to
                    ),
                ));
            }
            let already_in = range.max_to - legal.all_in.unwrap_or(0);
            Ok(ValidatedAction::Raise {
                to,
                added: to - already_in,
            })
        }
        A::AllIn => legal
            .all_in
            .map(ValidatedAction::AllIn)
            .ok_or_else(|| GameError::illegal(seat, "no chips left")),
        A::Fold => Err(GameError::illegal(seat, "folding is not allowed")),
    }
}
