use game_core::{GameEvent, GameEventHandler};
use game_types::{DisplayField, RoundEndReason, Screen};
use std::io::Write;
use tracing::warn;

/// Prints session events as plain text lines
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameEventHandler for TerminalDisplay<W> {
    fn handle_event(&mut self, event: GameEvent) {
        for line in render_event(&event) {
            if let Err(e) = writeln!(self.out, "{}", line) {
                warn!("Failed to write to terminal: {}", e);
                return;
            }
        }
        if let Err(e) = self.out.flush() {
            warn!("Failed to flush terminal: {}", e);
        }
    }
}

pub fn screen_prompt(screen: Screen) -> &'static str {
    match screen {
        Screen::NamingPlayer => "Welcome to the twisted world! Enter your name:",
        Screen::SelectingDifficulty => "Select difficulty (medium/hard):",
        Screen::Playing => "Unscramble the words! Type :hint or ? for a hint, :restart to start over.",
        Screen::RoundEnded => "Round over. Type :restart to play again.",
    }
}

/// The countdown is printed every half minute and each of the last ten seconds
fn timer_worth_showing(value: &str) -> bool {
    value.ends_with(":00") || value.ends_with(":30") || value.starts_with("0:0")
}

/// Lines to print for one event; cleared fields print nothing
pub fn render_event(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::ScreenChanged { screen } => vec![screen_prompt(*screen).to_string()],
        GameEvent::DisplayUpdated { value, .. } if value.is_empty() => Vec::new(),
        GameEvent::DisplayUpdated { field, value } => match field {
            DisplayField::JumbledWord => vec![format!("Jumbled Word: {}", value)],
            DisplayField::Timer if timer_worth_showing(value) => {
                vec![format!("Time Left: {}", value)]
            }
            DisplayField::Timer => Vec::new(),
            DisplayField::Score => vec![format!("Score: {}", value)],
            DisplayField::Player => vec![format!("Player: {}", value)],
            DisplayField::Warning => vec![format!("! {}", value)],
            DisplayField::RecentRecords => std::iter::once("Score Board:".to_string())
                .chain(value.lines().map(|line| format!("  {}", line)))
                .collect(),
            DisplayField::Result | DisplayField::Hint | DisplayField::HighScore => {
                vec![value.clone()]
            }
        },
        GameEvent::GuessInputToggled { .. } => Vec::new(),
        GameEvent::RoundEnded {
            reason,
            record,
            new_high_score,
        } => {
            let why = match reason {
                RoundEndReason::Exhausted => "all words solved",
                RoundEndReason::Timeout => "out of time",
            };
            let mut lines = vec![format!(
                "Final score: {} in {}s ({})",
                record.score, record.duration_seconds, why
            )];
            if *new_high_score {
                lines.push("New high score!".to_string());
            }
            lines
        }
    }
}
