use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{Difficulty, Screen};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    /// Bad player input; the screen stays where it was
    #[error("{message}")]
    Validation { message: String },
    #[error("No words available for {difficulty}: {reason}")]
    DataUnavailable {
        difficulty: Difficulty,
        reason: String,
    },
    #[error("Cannot {action} while on {screen}")]
    InvalidState { action: String, screen: Screen },
}

impl GameError {
    pub fn invalid_state(action: &str, screen: Screen) -> Self {
        GameError::InvalidState {
            action: action.to_string(),
            screen,
        }
    }
}
