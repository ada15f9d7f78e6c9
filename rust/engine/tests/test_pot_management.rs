use holdem_engine::cards::parse_cards;
use holdem_engine::hand::{evaluate, EvaluatedHand};
use holdem_engine::pot::{Pot, PotManager};

fn hand(s: &str) -> Option<EvaluatedHand> {
    Some(evaluate(&parse_cards(s).unwrap()).unwrap())
}

#[test]
fn heads_up_simple_side_pot() {
    let pm = PotManager::from_contributions([500, 1000]);
    assert_eq!(pm.main_pot(), 1000);
    assert_eq!(pm.side_pots(), vec![500]);
}

#[test]
fn equal_stacks_no_side_pot() {
    let pm = PotManager::from_contributions([1000, 1000]);
    assert_eq!(pm.main_pot(), 2000);
    assert!(pm.side_pots().is_empty());
}

#[test]
fn three_all_ins_build_tiered_pots() {
    let pm = PotManager::from_contributions([10, 30, 50]);
    assert_eq!(
        pm.pots(),
        &[
            Pot {
                amount: 30,
                eligible: vec![0, 1, 2]
            },
            Pot {
                amount: 40,
                eligible: vec![1, 2]
            },
            Pot {
                amount: 20,
                eligible: vec![2]
            },
        ]
    );
    assert_eq!(pm.total(), 90);
}

#[test]
fn short_stack_can_win_only_the_main_pot() {
    let pm = PotManager::from_contributions([10, 30, 50]);
    let hands = vec![
        hand("Ah Ad Ac Kd Ks 2c 3h"), // full house
        hand("Qh Qd 9c 8d 4s 2d 3s"), // pair
        hand("Jh Td 9s 8h 3c 2h 4d"), // high card
    ];
    let awards = pm.award(&hands, 0);
    assert_eq!(awards[0].winners, vec![0]);
    assert_eq!(awards[0].shares, vec![(0, 30)]);
    assert_eq!(awards[1].winners, vec![1]);
    assert_eq!(awards[2].winners, vec![2]);
    assert_eq!(awards[2].shares, vec![(2, 20)]);
}

#[test]
fn split_pot_gives_odd_chip_left_of_button() {
    let pm = PotManager::build(&[5, 5, 5], &[false, false, true]);
    assert_eq!(pm.total(), 15);
    let board_plays = hand("Ah Kh Qh Jh Th 2c 3d");
    let hands = vec![board_plays.clone(), board_plays, None];

    let awards = pm.award(&hands, 0);
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].winners, vec![0, 1]);
    // seat 1 sits directly left of the button
    assert_eq!(awards[0].shares, vec![(1, 8), (0, 7)]);

    let awards = pm.award(&hands, 1);
    assert_eq!(awards[0].shares, vec![(0, 8), (1, 7)]);
}

#[test]
fn folded_seat_never_wins() {
    let pm = PotManager::build(&[100, 100], &[true, false]);
    let hands = vec![None, hand("2c 3d 4h 7s 9c Jd Kh")];
    let awards = pm.award(&hands, 0);
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].shares, vec![(1, 200)]);
}
