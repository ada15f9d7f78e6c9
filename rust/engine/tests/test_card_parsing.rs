use holdem_engine::cards::{full_deck, parse_cards, Card, Rank, Suit};
use holdem_engine::errors::GameError;

#[test]
fn parses_canonical_and_lowercase_forms() {
    let ace: Card = "As".parse().unwrap();
    assert_eq!(ace, Card::new(Rank::Ace, Suit::Spades));
    let ten: Card = "td".parse().unwrap();
    assert_eq!(ten, Card::new(Rank::Ten, Suit::Diamonds));
}

#[test]
fn rejects_malformed_cards() {
    for bad in ["10h", "Ax", "1s", "", "A"] {
        let r: Result<Card, _> = bad.parse();
        assert!(
            matches!(r, Err(GameError::InvalidCard(_))),
            "'{bad}' should not parse"
        );
    }
    assert!(parse_cards("As Kd 1c").is_err());
}

#[test]
fn numeric_construction_is_range_checked() {
    assert_eq!(
        Card::try_from_values(14, 3).unwrap(),
        Card::new(Rank::Ace, Suit::Spades)
    );
    assert!(Card::try_from_values(15, 0).is_err());
    assert!(Card::try_from_values(1, 0).is_err());
    assert!(Card::try_from_values(14, 4).is_err());
}

#[test]
fn display_forms() {
    let king = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(king.to_string(), "Kd");
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).pretty(), "A♠");
    assert_eq!(Rank::Ten.name(), "Ten");
}

#[test]
fn display_round_trips_for_every_card() {
    for card in full_deck() {
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
}

#[test]
fn rank_dominates_card_ordering() {
    let two_spades = Card::new(Rank::Two, Suit::Spades);
    let three_clubs = Card::new(Rank::Three, Suit::Clubs);
    assert!(two_spades < three_clubs);
}
