use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::config::TableConfig;
use holdem_engine::errors::GameError;
use holdem_engine::player::{PlayerAction, PlayerState, STARTING_STACK};
use holdem_engine::table::Table;

#[test]
fn players_start_with_default_stack() {
    let p = PlayerState::new(0, STARTING_STACK);
    assert_eq!(p.stack(), 1_000);
    assert!(p.in_hand());
    assert!(p.can_act());
}

#[test]
fn player_receives_two_hole_cards_once() {
    let mut p = PlayerState::new(0, STARTING_STACK);
    let a = Card::new(Rank::Ace, Suit::Spades);
    let k = Card::new(Rank::King, Suit::Spades);
    p.give_cards([a, k]).unwrap();
    assert_eq!(p.hole_cards(), Some([a, k]));
    assert!(p.give_cards([a, k]).is_err());
}

#[test]
fn committing_reduces_stack_and_cannot_overcommit() {
    let mut p = PlayerState::new(3, 500);
    p.commit(120).unwrap();
    assert_eq!(p.stack(), 380);
    assert_eq!(p.bet_this_round(), 120);
    assert!(matches!(
        p.commit(1_000),
        Err(GameError::IllegalAction { seat: 3, .. })
    ));

    p.commit(380).unwrap();
    assert!(p.is_all_in());
    assert!(!p.can_act());
    assert!(p.in_hand());
    assert_eq!(p.sweep_bet(), 500);
    assert_eq!(p.committed(), 500);
}

#[test]
fn reset_clears_hand_state_but_keeps_stack() {
    let mut p = PlayerState::new(0, 200);
    p.commit(50).unwrap();
    p.fold();
    p.reset_for_hand();
    assert_eq!(p.stack(), 150);
    assert_eq!(p.committed(), 0);
    assert!(!p.is_folded());

    let mut broke = PlayerState::new(1, 0);
    broke.reset_for_hand();
    assert!(broke.is_folded());
}

#[test]
fn snapshots_hide_other_hole_cards() {
    let mut table = Table::new(TableConfig {
        seats: 3,
        seed: Some(17),
        ..TableConfig::default()
    })
    .unwrap();
    table.start_hand().unwrap();

    let observer = table.state();
    assert!(observer.players.iter().all(|p| p.hole_cards.is_none()));

    let seat1 = table.state_for(Some(1));
    assert_eq!(seat1.players[1].hole_cards, table.players()[1].hole_cards());
    assert!(seat1.players[0].hole_cards.is_none());
    assert!(seat1.players[2].hole_cards.is_none());

    let pending = table.pending_decision().unwrap();
    assert_eq!(pending.state.to_act, Some(pending.seat));
    assert!(pending.state.players[pending.seat].hole_cards.is_some());
}

#[test]
fn snapshot_reports_betting_state() {
    let mut table = Table::new(TableConfig {
        seed: Some(2),
        ..TableConfig::default()
    })
    .unwrap();
    table.start_hand().unwrap();
    table.apply_action(0, PlayerAction::Raise(30)).unwrap();

    let state = table.state();
    assert_eq!(state.hand_number, 1);
    assert_eq!(state.current_bet, 30);
    assert_eq!(state.min_raise, 20);
    assert_eq!(state.to_call(1), 20);
    assert_eq!(state.total_in_play(), 40);
    assert_eq!(state.players_in_hand(), 2);
    assert_eq!((state.small_blind, state.big_blind), (5, 10));
    assert!(!state.hand_over);
}
