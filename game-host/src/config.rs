use anyhow::{Context, Result, bail};
use game_core::GameSettings;
use game_persistence::{DEFAULT_HIGH_SCORE_FILE, DEFAULT_HISTORY_FILE};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    pub words_directory: PathBuf,
    pub high_score_file: PathBuf,
    pub score_history_file: PathBuf,
    pub round_seconds: u32,
    pub recent_records_limit: usize,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);

        let round_seconds = parse_var(&lookup, "ROUND_SECONDS", defaults.round_seconds)?;
        if round_seconds == 0 {
            bail!("Invalid ROUND_SECONDS: a round must last at least one second");
        }

        Ok(Self {
            words_directory: path("WORDS_DIRECTORY", defaults.words_directory),
            high_score_file: path("HIGH_SCORE_FILE", defaults.high_score_file),
            score_history_file: path("SCORE_HISTORY_FILE", defaults.score_history_file),
            round_seconds,
            recent_records_limit: parse_var(
                &lookup,
                "RECENT_RECORDS_LIMIT",
                defaults.recent_records_limit,
            )?,
            log_level: parse_var(&lookup, "LOG_LEVEL", defaults.log_level)?,
        })
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            round_seconds: self.round_seconds,
            recent_records_limit: self.recent_records_limit,
            ..GameSettings::default()
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            words_directory: PathBuf::from("./shared/words"),
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            score_history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            round_seconds: settings.round_seconds,
            recent_records_limit: settings.recent_records_limit,
            log_level: Level::WARN,
        }
    }
}
