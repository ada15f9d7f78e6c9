//! Trivial opponents used as baselines and in tests.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use holdem_engine::decision::{DecisionOutcome, DecisionSource};
use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::LegalActions;

/// Never folds, never raises: checks when free, otherwise calls.
#[derive(Debug, Clone, Default)]
pub struct CallingStation;

impl DecisionSource for CallingStation {
    fn decide(&mut self, _state: &GameState, legal: &LegalActions) -> DecisionOutcome {
        if legal.check {
            PlayerAction::Check.into()
        } else if legal.call.is_some() {
            PlayerAction::Call.into()
        } else {
            PlayerAction::Fold.into()
        }
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}

/// Picks uniformly among the legal action kinds; raises go to a random legal size.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DecisionSource for RandomAI {
    fn decide(&mut self, _state: &GameState, legal: &LegalActions) -> DecisionOutcome {
        let choices = legal.to_vec();
        let Some(&choice) = choices.choose(&mut self.rng) else {
            return DecisionOutcome::Failed("no legal actions".into());
        };
        match (choice, legal.raise) {
            (PlayerAction::Raise(_), Some(r)) => {
                PlayerAction::Raise(self.rng.random_range(r.min_to..=r.max_to)).into()
            }
            _ => choice.into(),
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
