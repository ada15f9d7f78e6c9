//! Baseline heuristic decision source.
//!
//! A deterministic rule-based player: hole-card strength pre-flop, evaluated hand
//! category post-flop, and pot odds when facing a bet.

use holdem_engine::cards::Card;
use holdem_engine::decision::{DecisionOutcome, DecisionSource};
use holdem_engine::game::{GameState, Phase};
use holdem_engine::hand::{evaluate, HandRank};
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::LegalActions;

/// Simple baseline AI for testing and comparison.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to raises, check if free
///
/// **Postflop:**
/// - Strong hands (Two Pair+): Bet or call
/// - Medium hands (One Pair): Check or call small bets
/// - Weak hands: Check when free, otherwise fold unless the price is tiny
///
/// Every answer is taken from the legal set it is given.
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Preflop hand strength on a 0-10 scale.
    ///
    /// - 9-10: Premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQs)
    /// - 5-6: Medium hands (88-77, AJ, suited connectors)
    /// - 3-4: Marginal hands (66-22, Ax, broadway)
    /// - 0-2: Weak hands (offsuit low cards)
    fn evaluate_preflop_strength(hole_cards: [Card; 2]) -> u8 {
        let [c1, c2] = hole_cards;
        let r1 = c1.rank.value();
        let r2 = c2.rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = c1.suit == c2.suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength from the evaluated category, or `None` before the flop.
    fn evaluate_postflop_strength(hole_cards: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole_cards.to_vec();
        cards.extend_from_slice(board);
        let hand = evaluate(&cards).ok()?;

        let base = match hand.rank {
            HandRank::HighCard => 1,
            HandRank::OnePair => 3,
            HandRank::TwoPair => 5,
            HandRank::ThreeOfAKind => 6,
            HandRank::Straight => 7,
            HandRank::Flush => 8,
            HandRank::FullHouse => 9,
            HandRank::FourOfAKind | HandRank::StraightFlush | HandRank::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(hand.tiebreak.first().is_some_and(|&r| r >= 12));
        Some((base + kicker_boost).min(10))
    }

    /// Pot odds as pot / (pot + call).
    fn calculate_pot_odds(pot_size: u32, call_amount: u32) -> f32 {
        if call_amount == 0 {
            return 1.0;
        }
        pot_size as f32 / (pot_size + call_amount) as f32
    }

    /// Raise to `current_bet + size`, clamped into the legal range.
    fn sized_raise(legal: &LegalActions, current_bet: u32, size: u32) -> Option<PlayerAction> {
        legal.raise.map(|r| {
            PlayerAction::Raise(current_bet.saturating_add(size).clamp(r.min_to, r.max_to))
        })
    }

    fn decide_action(hand_strength: u8, state: &GameState, legal: &LegalActions) -> PlayerAction {
        let pot = state.total_in_play();
        let to_call = legal.to_call;

        if legal.check {
            let bet = match hand_strength {
                9..=10 => Self::sized_raise(legal, state.current_bet, pot * 2 / 3),
                7..=8 => Self::sized_raise(legal, state.current_bet, pot / 2),
                _ => None,
            };
            return bet.unwrap_or(PlayerAction::Check);
        }

        // calling would put the whole stack in
        if legal.call.is_some_and(|c| legal.all_in == Some(c)) {
            return if hand_strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        let pot_odds = Self::calculate_pot_odds(pot, to_call);
        match hand_strength {
            9..=10 => Self::sized_raise(legal, state.current_bet, pot / 2)
                .unwrap_or(PlayerAction::Call),
            7..=8 => PlayerAction::Call,
            5..=6 if pot_odds >= 0.7 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if pot_odds >= 0.8 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

impl DecisionSource for BaselineAI {
    fn decide(&mut self, state: &GameState, legal: &LegalActions) -> DecisionOutcome {
        let hole = state.player(legal.seat).and_then(|p| p.hole_cards);
        let Some(hole) = hole else {
            // no cards visible: play it safe
            return if legal.check {
                PlayerAction::Check.into()
            } else {
                PlayerAction::Fold.into()
            };
        };

        let strength = if state.phase == Phase::PreFlop {
            Self::evaluate_preflop_strength(hole)
        } else {
            Self::evaluate_postflop_strength(hole, &state.community_cards)
                .unwrap_or_else(|| Self::evaluate_preflop_strength(hole))
        };

        let action = Self::decide_action(strength, state, legal);
        if legal.can(action) {
            action.into()
        } else if legal.check {
            PlayerAction::Check.into()
        } else {
            PlayerAction::Fold.into()
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::config::TableConfig;
    use holdem_engine::rules::legal_actions;
    use holdem_engine::table::Table;

    fn hole(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn test_baseline_ai_creation() {
        let ai = BaselineAI::new();
        assert_eq!(ai.name(), "BaselineAI");
    }

    #[test]
    fn test_preflop_strength_premium_pairs() {
        assert_eq!(BaselineAI::evaluate_preflop_strength(hole("Ah As")), 10);
        assert_eq!(BaselineAI::evaluate_preflop_strength(hole("Kh Ks")), 10);
    }

    #[test]
    fn test_preflop_strength_ace_king() {
        assert_eq!(BaselineAI::evaluate_preflop_strength(hole("Ah Kh")), 10);
        assert_eq!(BaselineAI::evaluate_preflop_strength(hole("Ah Ks")), 8);
    }

    #[test]
    fn test_preflop_strength_weak_hands() {
        assert!(BaselineAI::evaluate_preflop_strength(hole("7h 2s")) <= 3);
    }

    #[test]
    fn test_suited_connectors() {
        let strength = BaselineAI::evaluate_preflop_strength(hole("9h 8h"));
        assert!((4..=6).contains(&strength));
    }

    #[test]
    fn test_pot_odds_calculation() {
        let odds = BaselineAI::calculate_pot_odds(100, 50);
        assert!((odds - 0.667).abs() < 0.01);
        assert_eq!(BaselineAI::calculate_pot_odds(100, 0), 1.0);
    }

    #[test]
    fn test_postflop_strength_uses_partial_board() {
        let board = parse_cards("Ad Kc Qh").unwrap();
        let strength = BaselineAI::evaluate_postflop_strength(hole("Ah As"), &board);
        assert!(strength.unwrap() >= 6);
        assert_eq!(BaselineAI::evaluate_postflop_strength(hole("Ah As"), &[]), None);
    }

    #[test]
    fn test_answers_are_always_legal() {
        let mut table = Table::new(TableConfig {
            seats: 3,
            seed: Some(42),
            ..TableConfig::default()
        })
        .unwrap();
        table.start_hand().unwrap();
        let req = table.pending_decision().expect("someone acts pre-flop");
        let mut ai = BaselineAI::new();
        match ai.decide(&req.state, &req.legal) {
            DecisionOutcome::Act(a) => assert!(req.legal.can(a)),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_no_hole_cards_checks_or_folds() {
        let table = Table::new(TableConfig::default()).unwrap();
        let state = table.state();
        let mut ai = BaselineAI::new();
        let legal = legal_actions(0, 100, 0, 10, 10);
        assert_eq!(ai.decide(&state, &legal), DecisionOutcome::Act(PlayerAction::Fold));
    }
}
