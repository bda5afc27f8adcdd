use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::records::{
    decode_high_score, decode_recent_history, encode_high_score, encode_history_line, most_recent,
};
use crate::ScoreStore;
use game_types::{HighScoreEntry, ScoreRecord};

pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";
pub const DEFAULT_HISTORY_FILE: &str = "scores.txt";

/// Score store backed by two flat text files
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    high_score_path: PathBuf,
    history_path: PathBuf,
}

impl FileScoreStore {
    pub fn new(high_score_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            high_score_path: high_score_path.into(),
            history_path: history_path.into(),
        }
    }

    /// Store using the default file names inside `dir`
    pub fn in_directory(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(DEFAULT_HIGH_SCORE_FILE),
            dir.join(DEFAULT_HISTORY_FILE),
        )
    }

    pub fn high_score_path(&self) -> &Path {
        &self.high_score_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display())),
            _ => Ok(()),
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load_high_score(&self) -> HighScoreEntry {
        let contents = match fs::read_to_string(&self.high_score_path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(
                    "No high score at {}: {}",
                    self.high_score_path.display(),
                    e
                );
                return HighScoreEntry::default();
            }
        };

        decode_high_score(&contents).unwrap_or_else(|| {
            warn!(
                "Malformed high score record in {}, using default",
                self.high_score_path.display()
            );
            HighScoreEntry::default()
        })
    }

    fn save_high_score(&mut self, entry: &HighScoreEntry) -> Result<()> {
        Self::ensure_parent(&self.high_score_path)?;
        fs::write(&self.high_score_path, encode_high_score(entry)).with_context(|| {
            format!(
                "Failed to write high score to {}",
                self.high_score_path.display()
            )
        })
    }

    fn append_round_record(&mut self, record: &ScoreRecord) -> Result<()> {
        Self::ensure_parent(&self.history_path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)
            .with_context(|| format!("Failed to open {}", self.history_path.display()))?;

        writeln!(file, "{}", encode_history_line(record))
            .with_context(|| format!("Failed to append to {}", self.history_path.display()))
    }

    fn load_recent_records(&self, limit: usize) -> Vec<ScoreRecord> {
        match fs::read_to_string(&self.history_path) {
            Ok(contents) => decode_recent_history(&contents, limit),
            Err(e) => {
                debug!("No score history at {}: {}", self.history_path.display(), e);
                Vec::new()
            }
        }
    }
}

/// Score store kept in memory, for tests and embedders without a disk
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: Option<HighScoreEntry>,
    history: Vec<ScoreRecord>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(entry: HighScoreEntry) -> Self {
        Self {
            high_score: Some(entry),
            history: Vec::new(),
        }
    }

    /// Every record in append order
    pub fn history(&self) -> &[ScoreRecord] {
        &self.history
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_high_score(&self) -> HighScoreEntry {
        self.high_score.clone().unwrap_or_default()
    }

    fn save_high_score(&mut self, entry: &HighScoreEntry) -> Result<()> {
        self.high_score = Some(entry.clone());
        Ok(())
    }

    fn append_round_record(&mut self, record: &ScoreRecord) -> Result<()> {
        self.history.push(record.clone());
        Ok(())
    }

    fn load_recent_records(&self, limit: usize) -> Vec<ScoreRecord> {
        most_recent(self.history.clone(), limit)
    }
}
