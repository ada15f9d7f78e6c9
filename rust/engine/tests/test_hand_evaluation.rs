use holdem_engine::cards::parse_cards;
use holdem_engine::errors::GameError;
use holdem_engine::hand::{compare, evaluate, Comparison, EvaluatedHand, HandRank};

fn eval(s: &str) -> EvaluatedHand {
    evaluate(&parse_cards(s).unwrap()).unwrap()
}

#[test]
fn detects_royal_flush() {
    let hs = eval("As Ks Qs Js Ts");
    assert_eq!(hs.rank, HandRank::RoyalFlush);
    assert_eq!(hs.tiebreak, vec![14]);

    let seven = eval("Th Jh Qh Kh Ah 2c 3d");
    assert_eq!(seven.rank, HandRank::RoyalFlush);
}

#[test]
fn wheel_straight_flush_is_five_high() {
    let hs = eval("2s 3s 4s 5s As");
    assert_eq!(hs.rank, HandRank::StraightFlush);
    assert_eq!(hs.tiebreak, vec![5]);
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let wheel = eval("Ah 2d 3c 4s 5h 9c Kd");
    assert_eq!(wheel.rank, HandRank::Straight);
    assert_eq!(wheel.tiebreak, vec![5]);

    let six_high = eval("2d 3c 4s 5h 6d 9c Kd");
    assert_eq!(six_high.tiebreak, vec![6]);
    assert_eq!(compare(&six_high, &wheel), Comparison::AWins);
}

#[test]
fn aces_full_beats_queens_full() {
    let a = eval("Ah Ad As Kh Kd");
    let b = eval("Qc Qd Qh Jc Jd");
    assert_eq!(a.rank, HandRank::FullHouse);
    assert_eq!(a.tiebreak, vec![14, 13]);
    assert_eq!(compare(&a, &b), Comparison::AWins);
    assert_eq!(compare(&b, &a), Comparison::BWins);
}

#[test]
fn category_ordering_is_correct() {
    let quads = eval("Ac Ad Ah As Kc Qd 2h");
    let full_house = eval("Kc Kd Kh Qc Qd 2h 3s");
    assert_eq!(quads.rank, HandRank::FourOfAKind);
    assert_eq!(quads.tiebreak, vec![14, 13]);
    assert!(quads > full_house);

    let flush = eval("2h 7h 9h Jh Kh 3c 4d");
    let straight = eval("5c 6h 7c 8h 9d 2s 3c");
    assert_eq!(flush.rank, HandRank::Flush);
    assert_eq!(flush.tiebreak, vec![13, 11, 9, 7, 2]);
    assert_eq!(straight.rank, HandRank::Straight);
    assert!(flush > straight);

    let trips = eval("5c 5h 5d Kh 9d 2s 3c");
    assert_eq!(trips.rank, HandRank::ThreeOfAKind);
    assert_eq!(trips.tiebreak, vec![5, 13, 9]);
    assert!(straight > trips);
}

#[test]
fn best_two_pair_from_three_pairs_keeps_highest_kicker() {
    let hs = eval("Ah Ad Kc Ks 2h 2d 9c");
    assert_eq!(hs.rank, HandRank::TwoPair);
    assert_eq!(hs.tiebreak, vec![14, 13, 9]);
}

#[test]
fn two_trips_make_a_full_house() {
    let hs = eval("7c 7d 7h 9s 9c 9d 2h");
    assert_eq!(hs.rank, HandRank::FullHouse);
    assert_eq!(hs.tiebreak, vec![9, 7]);
}

#[test]
fn kicker_breaks_pair_ties() {
    let king_kicker = eval("Ah Ad Kc 7s 4h 3d 2c");
    let queen_kicker = eval("As Ac Qc 7d 4c 3h 2d");
    assert_eq!(king_kicker.rank, HandRank::OnePair);
    assert_eq!(king_kicker.tiebreak, vec![14, 13, 7, 4]);
    assert_eq!(compare(&king_kicker, &queen_kicker), Comparison::AWins);
}

#[test]
fn board_playing_for_both_is_a_tie() {
    let a = eval("2c 3d Ah Kh Qh Jh Th");
    let b = eval("4c 5d Ah Kh Qh Jh Th");
    assert_eq!(compare(&a, &b), Comparison::Tie);
}

#[test]
fn high_card_uses_five_highest() {
    let hs = eval("2c 4d 7h 9s Jc Qd Kh");
    assert_eq!(hs.rank, HandRank::HighCard);
    assert_eq!(hs.tiebreak, vec![13, 12, 11, 9, 7]);
}

#[test]
fn too_few_cards_is_an_error() {
    let cards = parse_cards("As Ks Qs Js").unwrap();
    assert_eq!(
        evaluate(&cards).unwrap_err(),
        GameError::InsufficientCards { got: 4 }
    );
}

#[test]
fn duplicate_cards_are_rejected() {
    let cards = parse_cards("As As Kd Qc Jh").unwrap();
    let dup = cards[0];
    assert_eq!(evaluate(&cards).unwrap_err(), GameError::DuplicateCard(dup));
}

#[test]
fn best_cards_are_reported() {
    let hs = eval("Ah Kh Qh Jh Th 2c 3d");
    let mut best: Vec<String> = hs.cards.iter().map(|c| c.to_string()).collect();
    best.sort();
    assert_eq!(best, vec!["Ah", "Jh", "Kh", "Qh", "Th"]);
    assert_eq!(hs.to_string(), "Royal Flush");
}
