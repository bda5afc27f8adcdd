use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Difficulty, DisplayField, RoundEndReason, Screen, ScoreRecord};

/// Intents the presentation layer forwards into the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PlayerIntent {
    SubmitName { name: String },
    SelectDifficulty { difficulty: Difficulty },
    SubmitGuess { text: String },
    RequestHint,
    Restart,
    Tick,
}

/// Notifications the session pushes out to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameEvent {
    ScreenChanged { screen: Screen },
    DisplayUpdated { field: DisplayField, value: String },
    GuessInputToggled { enabled: bool },
    RoundEnded {
        reason: RoundEndReason,
        record: ScoreRecord,
        new_high_score: bool,
    },
}
