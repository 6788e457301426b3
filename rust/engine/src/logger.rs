use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::DrawSource;

/// The most recent play, kept on the game so a transport layer can
/// replay it to polling clients.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Name of the acting player
    pub player: String,
    /// Cards discarded onto the pile, in pile order
    pub played: Vec<Card>,
    /// The replacement card, if one could be drawn
    pub drawn: Option<Card>,
    /// Where the replacement came from
    pub draw_source: DrawSource,
}

/// Everything a round-end produces: the revealed hands (in display
/// order), per-player round values, updated cumulative scores, whether
/// the declarer was undercut, and who took the round at zero.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Name of the player who declared the end of the round
    pub ender: String,
    /// Each player's revealed hand, sorted for display
    pub hands: BTreeMap<String, Vec<Card>>,
    /// Points each player was charged this round (0 for the round-low)
    pub round_values: BTreeMap<String, u32>,
    /// Cumulative scores after this round was applied
    pub scores: BTreeMap<String, u32>,
    /// True when the declarer was undercut and penalized
    pub penalty_applied: bool,
    /// Players whose counted value was the round-low
    pub lowest_players: Vec<String>,
}

/// Complete record of one finished round, serialized to JSONL for round
/// history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// RNG seed the game was created with, when known
    pub seed: Option<u64>,
    /// The round's scoring summary
    pub summary: RoundSummary,
    /// Timestamp when the round ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file, one line per round.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
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
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
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
        Ok(())
    }
}
