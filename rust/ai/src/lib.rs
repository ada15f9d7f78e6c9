//! # holdem-ai: Decision Sources for the Hold'em Engine
//!
//! Interchangeable implementations of
//! [`DecisionSource`](holdem_engine::decision::DecisionSource). The table is
//! indifferent to which one sits in a seat.
//!
//! - [`baseline::BaselineAI`] - deterministic heuristic player
//! - [`simple::CallingStation`] - checks or calls every decision
//! - [`simple::RandomAI`] - seeded uniformly random legal actions
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::table::Table;
//!
//! let mut table = Table::new(TableConfig { seats: 3, seed: Some(42), ..TableConfig::default() }).unwrap();
//! let mut seats = vec![
//!     create_ai("baseline", 1).unwrap(),
//!     create_ai("calling-station", 2).unwrap(),
//!     create_ai("random", 3).unwrap(),
//! ];
//! let result = table.play_hand(&mut seats).unwrap();
//! assert!(!result.winners.is_empty());
//! ```

use holdem_engine::decision::DecisionSource;

pub mod baseline;
pub mod simple;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 3] = ["baseline", "calling-station", "random"];

/// Creates a decision source by name; `seed` only matters for `"random"`.
///
/// Returns `None` for unknown names.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("llm", 0).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn DecisionSource>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "calling-station" => Some(Box::new(simple::CallingStation)),
        "random" => Some(Box::new(simple::RandomAI::new(seed))),
        _ => {
            tracing::warn!(kind, "unknown decision source");
            None
        }
    }
}
