use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::GameError;

/// Word list a round is played with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Difficulty {
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Medium, Difficulty::Hard];

    /// File name of the word list backing this difficulty
    pub fn word_list_file(&self) -> &'static str {
        match self {
            Difficulty::Medium => "medium_words.txt",
            Difficulty::Hard => "hard_words.txt",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(GameError::Validation {
                message: format!("Unknown difficulty: {}", other),
            }),
        }
    }
}

/// The screen the session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Screen {
    NamingPlayer,
    SelectingDifficulty,
    Playing,
    RoundEnded,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::NamingPlayer => "NamingPlayer",
            Screen::SelectingDifficulty => "SelectingDifficulty",
            Screen::Playing => "Playing",
            Screen::RoundEnded => "RoundEnded",
        };
        f.write_str(name)
    }
}

/// Display slots the presentation layer renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DisplayField {
    JumbledWord,
    Timer,
    Score,
    Result,
    Hint,
    Player,
    HighScore,
    RecentRecords, // newline separated, most recent first
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoundEndReason {
    Exhausted, // every word in the list was solved
    Timeout,
}

/// Summary of a finished round, kept by the session until restart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundOutcome {
    pub reason: RoundEndReason,
    pub record: crate::ScoreRecord,
    pub new_high_score: bool,
}

/// Render seconds as `m:ss`
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
