//! Line formats for the flat score files.
//!
//! High score: a single `name,score` record.
//! History: one `name,score,durationSeconds` line per finished round.

use game_types::{HighScoreEntry, ScoreRecord};
use tracing::warn;

const FIELD_SEPARATOR: char = ',';

/// Stored in place of a name that is nothing but separators
pub const UNNAMED_PLAYER: &str = "Anonymous";

/// Strip characters that would break a record line. Never returns an empty name.
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == FIELD_SEPARATOR || c == '\n' || c == '\r' {
                ' '
            } else {
                c
            }
        })
        .collect();

    match cleaned.trim() {
        "" => UNNAMED_PLAYER.to_string(),
        trimmed => trimmed.to_string(),
    }
}

pub fn encode_high_score(entry: &HighScoreEntry) -> String {
    format!("{},{}", sanitize_name(&entry.player_name), entry.score)
}

pub fn decode_high_score(contents: &str) -> Option<HighScoreEntry> {
    let fields: Vec<&str> = contents.trim().split(FIELD_SEPARATOR).collect();
    if fields.len() != 2 {
        return None;
    }

    let player_name = fields[0].trim();
    if player_name.is_empty() {
        return None;
    }
    let score = fields[1].trim().parse().ok()?;

    Some(HighScoreEntry {
        player_name: player_name.to_string(),
        score,
    })
}

pub fn encode_history_line(record: &ScoreRecord) -> String {
    format!(
        "{},{},{}",
        sanitize_name(&record.player_name),
        record.score,
        record.duration_seconds
    )
}

pub fn decode_history_line(line: &str) -> Option<ScoreRecord> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let [name, score, duration] = fields.as_slice() else {
        return None;
    };

    Some(ScoreRecord {
        player_name: name.trim().to_string(),
        score: score.trim().parse().ok()?,
        duration_seconds: duration.trim().parse().ok()?,
    })
}

/// The last `limit` non-blank lines of a history file, newest first.
///
/// Malformed lines still take up their slot in the window and are then skipped.
pub fn decode_recent_history(contents: &str, limit: usize) -> Vec<ScoreRecord> {
    let lines: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    let skip = lines.len().saturating_sub(limit);

    lines[skip..]
        .iter()
        .rev()
        .filter_map(|line| {
            let record = decode_history_line(line);
            if record.is_none() {
                warn!("Skipping malformed score history line: {:?}", line);
            }
            record
        })
        .collect()
}

/// Keep the last `limit` records in append order, newest first
pub fn most_recent(records: Vec<ScoreRecord>, limit: usize) -> Vec<ScoreRecord> {
    let skip = records.len().saturating_sub(limit);
    records.into_iter().skip(skip).rev().collect()
}
