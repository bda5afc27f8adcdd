use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::GameError;

/// The person playing the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub name: String,
}

impl Player {
    /// Build a player from raw input, trimming surrounding whitespace
    pub fn new(name: &str) -> Result<Self, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Validation {
                message: "Please enter your name!".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// One completed round, as written to the score history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub duration_seconds: u32,
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}s",
            self.player_name, self.score, self.duration_seconds
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub const DEFAULT_HOLDER: &'static str = "No one";

    /// Whether `score` would take the high score. Ties keep the current holder.
    pub fn is_beaten_by(&self, score: u32) -> bool {
        score > self.score
    }
}

impl Default for HighScoreEntry {
    fn default() -> Self {
        Self {
            player_name: Self::DEFAULT_HOLDER.to_string(),
            score: 0,
        }
    }
}

impl fmt::Display for HighScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "High Score: {} by {}", self.score, self.player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name_is_trimmed() {
        let player = Player::new("  Alice \n").unwrap();
        assert_eq!(player.name, "Alice");
    }

    #[test]
    fn test_blank_player_name_rejected() {
        assert!(matches!(Player::new(""), Err(GameError::Validation { .. })));
        assert!(matches!(Player::new("   \t"), Err(GameError::Validation { .. })));
    }

    #[test]
    fn test_high_score_ties_do_not_beat() {
        let entry = HighScoreEntry {
            player_name: "Alice".to_string(),
            score: 30,
        };
        assert!(!entry.is_beaten_by(20));
        assert!(!entry.is_beaten_by(30));
        assert!(entry.is_beaten_by(40));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            HighScoreEntry::default().to_string(),
            "High Score: 0 by No one"
        );

        let record = ScoreRecord {
            player_name: "Bob".to_string(),
            score: 20,
            duration_seconds: 47,
        };
        assert_eq!(record.to_string(), "Bob | 20 | 47s");
    }
}
