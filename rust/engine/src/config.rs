use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::STARTING_STACK;

/// Cards a hand can consume beyond hole cards: five community cards and three burns.
const BOARD_AND_BURNS: usize = 8;
const DECK_SIZE: usize = 52;

/// Read-only table settings shared by every hand played at a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub seats: usize,
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Smallest raise increment; defaults to the big blind
    pub min_raise: Option<u32>,
    /// Deck seed; `None` draws a fresh one
    pub seed: Option<u64>,
    /// Allowed rejected actions before a seat is auto-folded
    pub max_illegal_attempts: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 2,
            starting_stack: STARTING_STACK,
            small_blind: 5,
            big_blind: 10,
            min_raise: None,
            seed: None,
            max_illegal_attempts: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl TableConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Largest table a single deck can deal without running out.
    pub fn max_seats() -> usize {
        (DECK_SIZE - BOARD_AND_BURNS) / 2
    }

    pub fn min_raise_increment(&self) -> u32 {
        self.min_raise.unwrap_or(self.big_blind)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats < 2 {
            return Err(ConfigError::Invalid(format!(
                "at least 2 seats required, got {}",
                self.seats
            )));
        }
        if self.seats * 2 + BOARD_AND_BURNS > DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "{} seats would exhaust the deck (max {})",
                self.seats,
                Self::max_seats()
            )));
        }
        if self.big_blind == 0 {
            return Err(ConfigError::Invalid("big blind must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::Invalid(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if self.min_raise_increment() == 0 {
            return Err(ConfigError::Invalid("min raise must be positive".into()));
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::Invalid("starting stack must be positive".into()));
        }
        // every chip total at the table is counted in u32
        let seats = u32::try_from(self.seats).unwrap_or(u32::MAX);
        if seats.checked_mul(self.starting_stack).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} seats of {} chips overflow the chip count",
                self.seats, self.starting_stack
            )));
        }
        Ok(())
    }
}
