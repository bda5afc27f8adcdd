pub mod records;
pub mod stores;

pub use records::*;
pub use stores::*;

use anyhow::Result;
use game_types::{HighScoreEntry, ScoreRecord};

/// Storage for the all-time high score and the round history.
///
/// Reads never fail: missing or malformed data falls back to defaults.
/// Writes report errors so the caller can warn without losing the round.
pub trait ScoreStore {
    fn load_high_score(&self) -> HighScoreEntry;

    /// Replace the stored high score wholesale
    fn save_high_score(&mut self, entry: &HighScoreEntry) -> Result<()>;

    fn append_round_record(&mut self, record: &ScoreRecord) -> Result<()>;

    /// Up to `limit` records, most recent first
    fn load_recent_records(&self, limit: usize) -> Vec<ScoreRecord>;
}
