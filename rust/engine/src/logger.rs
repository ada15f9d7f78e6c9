use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;

/// Records a single player action during a hand.
/// Associates the action with the seat and the phase when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Acting seat
    pub seat: usize,
    /// The betting phase when this action occurred
    pub phase: Phase,
    /// The action taken by the player
    pub action: PlayerAction,
    /// Applied by the table after a cancelled, failed or repeatedly illegal decision
    #[serde(default)]
    pub auto: bool,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Deck seed of the table (enables deterministic replay)
    pub seed: Option<u64>,
    pub button: usize,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Chips received per seat when the hand was settled
    pub payouts: Vec<u32>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    /// Showdown information if hand went to showdown
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends one JSON line per finished hand.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

/// Information about the showdown phase when hands are revealed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won at least one pot
    pub winners: Vec<usize>,
    /// Optional notes about the showdown (e.g., "split pot", "Flush, Ace-high")
    #[serde(default)]
    pub notes: Option<String>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(hand_id = %rec.hand_id, "hand record written");
        Ok(())
    }
}
