//! # holdem-engine: Texas Hold'em Engine Core
//!
//! A deterministic No-Limit Texas Hold'em engine for 2 to 22 seats.
//! Provides card and deck types, an exact 5-of-7 hand evaluator, and a betting
//! state machine with side pots, driven by pluggable decision sources.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand evaluation and comparison
//! - [`rules`] - Legal-action derivation and validation
//! - [`player`] - Player state and actions
//! - [`pot`] - Main/side pot construction and payout
//! - [`game`] - Phases and immutable table snapshots
//! - [`decision`] - The interface decision sources implement
//! - [`table`] - The hand state machine
//! - [`config`] - Table configuration (TOML)
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{compare, evaluate, Comparison, HandRank};
//!
//! let aces_full = evaluate(&parse_cards("Ah Ad As Kh Kd").unwrap()).unwrap();
//! let queens_full = evaluate(&parse_cards("Qc Qd Qh Jc Jd").unwrap()).unwrap();
//! assert_eq!(aces_full.rank, HandRank::FullHouse);
//! assert_eq!(compare(&aces_full, &queens_full), Comparison::AWins);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new(Some(42));
//! let mut deck2 = Deck::new(Some(42));
//! deck1.shuffle(None);
//! deck2.shuffle(None);
//! assert_eq!(deck1.deal_many(5).unwrap(), deck2.deal_many(5).unwrap());
//! ```

pub mod cards;
pub mod config;
pub mod decision;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod table;
