//! The narrow contract between a [`crate::table::Table`] and whatever chooses actions.

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::player::PlayerAction;
use crate::rules::LegalActions;

/// What a decision source produced for one pending decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionOutcome {
    /// An action, expected to be in the legal set
    Act(PlayerAction),
    /// The wait was cancelled (timeout, shutdown); the seat is folded
    Cancelled,
    /// The source could not produce an answer; the seat is folded
    Failed(String),
}

impl From<PlayerAction> for DecisionOutcome {
    fn from(action: PlayerAction) -> Self {
        DecisionOutcome::Act(action)
    }
}

/// A pending decision handed to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub seat: usize,
    /// Snapshot with only this seat's hole cards visible
    pub state: GameState,
    pub legal: LegalActions,
    /// Rejected attempts so far for this decision
    pub attempt: u16,
}

/// Anything that can pick an action for a seat.
///
/// Implementations receive an owned snapshot and the exact legal set and return one
/// outcome. The table never looks at how the answer was produced.
///
/// ```
/// use holdem_engine::decision::{DecisionOutcome, DecisionSource};
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::LegalActions;
///
/// struct AlwaysCheckOrFold;
///
/// impl DecisionSource for AlwaysCheckOrFold {
///     fn decide(&mut self, _state: &GameState, legal: &LegalActions) -> DecisionOutcome {
///         if legal.check { PlayerAction::Check.into() } else { PlayerAction::Fold.into() }
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCheckOrFold"
///     }
/// }
/// ```
pub trait DecisionSource: Send {
    fn decide(&mut self, state: &GameState, legal: &LegalActions) -> DecisionOutcome;

    fn name(&self) -> &str;
}
