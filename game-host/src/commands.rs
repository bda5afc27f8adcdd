use game_types::{Difficulty, GameError, PlayerIntent, Screen};

pub const RESTART_COMMANDS: [&str; 2] = [":restart", ":r"];
pub const HINT_COMMANDS: [&str; 2] = [":hint", "?"];

/// Turn a line of terminal input into an intent for the current screen.
///
/// Restart works everywhere; hint commands only mean something mid-round, so
/// elsewhere `?` is an ordinary name or difficulty.
pub fn parse_input(screen: Screen, line: &str) -> Result<PlayerIntent, GameError> {
    let trimmed = line.trim();
    let command = trimmed.to_lowercase();

    if RESTART_COMMANDS.contains(&command.as_str()) {
        return Ok(PlayerIntent::Restart);
    }
    if screen == Screen::Playing && HINT_COMMANDS.contains(&command.as_str()) {
        return Ok(PlayerIntent::RequestHint);
    }

    match screen {
        Screen::NamingPlayer => Ok(PlayerIntent::SubmitName {
            name: trimmed.to_string(),
        }),
        Screen::SelectingDifficulty => Ok(PlayerIntent::SelectDifficulty {
            difficulty: trimmed.parse::<Difficulty>()?,
        }),
        Screen::Playing => Ok(PlayerIntent::SubmitGuess {
            text: trimmed.to_string(),
        }),
        Screen::RoundEnded => Err(GameError::Validation {
            message: "Round over. Type :restart to play again.".to_string(),
        }),
    }
}
