use game_persistence::ScoreStore;
use game_types::{
    Difficulty, DisplayField, GameError, GameEvent, HighScoreEntry, Player, PlayerIntent,
    RoundEndReason, RoundOutcome, ScoreRecord, Screen, format_clock,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    GameEventBus, GameEventHandler, REWARD_UNIT, ROUND_DURATION_SECONDS, RoundTimer,
    ScoringEngine, TickOutcome, WordBank, WordSource, scramble,
};

pub type SessionId = Uuid;

pub const NO_MORE_WORDS: &str = "No more words!";
pub const CORRECT_MESSAGE: &str = "Correct!";
pub const RETRY_MESSAGE: &str = "Try again!";
pub const NO_HINT_MESSAGE: &str = "No word to hint yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub round_seconds: u32,
    pub reward: u32,
    pub recent_records_limit: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_DURATION_SECONDS,
            reward: REWARD_UNIT,
            recent_records_limit: 10,
        }
    }
}

/// Mutable state of the round being played
#[derive(Debug, Clone)]
pub struct RoundState {
    pub difficulty: Difficulty,
    pub remaining_words: Vec<String>, // drawn from the back
    pub current_word: String,
    pub scrambled_display: String,
    pub score: u32,
    pub timer: RoundTimer,
}

impl RoundState {
    fn new(difficulty: Difficulty, draw_order: Vec<String>, round_seconds: u32) -> Self {
        Self {
            difficulty,
            remaining_words: draw_order,
            current_word: String::new(),
            scrambled_display: String::new(),
            score: 0,
            timer: RoundTimer::new(round_seconds),
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { score: u32 },
    Incorrect,
}

/// One player's walk through name entry, difficulty selection, rounds and restarts.
///
/// Every intent and tick goes through `&mut self`, so handling is strictly
/// sequential. Display changes are published to the registered handlers.
pub struct GameSession {
    id: SessionId,
    settings: GameSettings,
    screen: Screen,
    player: Option<Player>,
    round: Option<RoundState>,
    last_outcome: Option<RoundOutcome>,
    high_score: HighScoreEntry,
    word_bank: WordBank,
    score_store: Box<dyn ScoreStore>,
    rng: StdRng,
    event_bus: GameEventBus,
}

impl GameSession {
    pub fn new(
        word_source: Box<dyn WordSource>,
        score_store: Box<dyn ScoreStore>,
        settings: GameSettings,
    ) -> Self {
        // A zero-length round could never tick to an end
        let settings = GameSettings {
            round_seconds: settings.round_seconds.max(1),
            ..settings
        };
        let high_score = score_store.load_high_score();
        let id = Uuid::new_v4();
        info!("Session {} created, current {}", id, high_score);

        Self {
            id,
            settings,
            screen: Screen::NamingPlayer,
            player: None,
            round: None,
            last_outcome: None,
            high_score,
            word_bank: WordBank::new(word_source),
            score_store,
            rng: StdRng::from_entropy(),
            event_bus: GameEventBus::new(),
        }
    }

    /// Use a fixed seed for word order and scrambles
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Push the current screen and banners so a freshly attached display can draw
    pub fn publish_initial_state(&mut self) {
        self.publish(GameEvent::ScreenChanged {
            screen: self.screen,
        });
        let banner = self.high_score.to_string();
        self.display(DisplayField::HighScore, banner);
        self.display(
            DisplayField::Timer,
            format_clock(self.settings.round_seconds),
        );
        self.refresh_recent_records();
    }

    pub fn dispatch(&mut self, intent: PlayerIntent) -> Result<(), GameError> {
        match intent {
            PlayerIntent::SubmitName { name } => self.submit_name(&name),
            PlayerIntent::SelectDifficulty { difficulty } => {
                self.select_difficulty_and_start(difficulty)
            }
            PlayerIntent::SubmitGuess { text } => self.submit_guess(&text).map(|_| ()),
            PlayerIntent::RequestHint => self.request_hint(),
            PlayerIntent::Restart => {
                self.restart();
                Ok(())
            }
            PlayerIntent::Tick => {
                self.on_timer_tick();
                Ok(())
            }
        }
    }

    pub fn submit_name(&mut self, name: &str) -> Result<(), GameError> {
        self.require_screen(Screen::NamingPlayer, "submit a name")?;

        let player = match Player::new(name) {
            Ok(player) => player,
            Err(e) => {
                self.display(DisplayField::Warning, e.to_string());
                return Err(e);
            }
        };

        debug!("Session {} player is {}", self.id, player.name);
        self.display(DisplayField::Warning, "");
        self.display(DisplayField::Player, player.name.clone());
        self.player = Some(player);
        self.set_screen(Screen::SelectingDifficulty);
        Ok(())
    }

    pub fn select_difficulty_and_start(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.require_screen(Screen::SelectingDifficulty, "start a round")?;

        let words = match self.word_bank.load(difficulty) {
            Ok(words) => words,
            Err(e) => {
                warn!("Session {} cannot start round: {}", self.id, e);
                self.display(DisplayField::Warning, e.to_string());
                return Err(e);
            }
        };

        let draw_order = WordBank::draw_order(&words, &mut self.rng);
        let mut round = RoundState::new(difficulty, draw_order, self.settings.round_seconds);
        round.timer.start();
        let timer_text = round.timer.display();
        self.round = Some(round);
        self.last_outcome = None;

        info!(
            "Session {} started {} round with {} words",
            self.id,
            difficulty,
            words.len()
        );

        self.display(DisplayField::Warning, "");
        self.display(DisplayField::Score, "0");
        self.display(DisplayField::Result, "");
        self.display(DisplayField::Hint, "");
        self.display(DisplayField::Timer, timer_text);
        self.publish(GameEvent::GuessInputToggled { enabled: true });
        self.set_screen(Screen::Playing);

        self.refresh_recent_records();
        self.advance_word()
    }

    /// Move to the next word, or end the round once the list is used up
    pub fn advance_word(&mut self) -> Result<(), GameError> {
        self.require_screen(Screen::Playing, "advance to the next word")?;

        let Some(round) = self.round.as_mut() else {
            return Err(GameError::invalid_state("advance to the next word", self.screen));
        };

        match round.remaining_words.pop() {
            Some(word) => {
                let scrambled = scramble(&word, &mut self.rng);
                debug!(
                    "Session {} next word ({} left)",
                    self.id,
                    round.remaining_words.len()
                );
                round.current_word = word;
                round.scrambled_display = scrambled.clone();

                self.display(DisplayField::JumbledWord, scrambled);
                self.display(DisplayField::Hint, "");
                self.display(DisplayField::Result, "");
                Ok(())
            }
            None => {
                round.current_word.clear();
                round.scrambled_display.clear();

                self.display(DisplayField::JumbledWord, NO_MORE_WORDS);
                self.publish(GameEvent::GuessInputToggled { enabled: false });
                self.end_round(RoundEndReason::Exhausted);
                Ok(())
            }
        }
    }

    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        self.require_screen(Screen::Playing, "submit a guess")?;

        let reward = self.settings.reward;
        let round = match self.round.as_mut() {
            Some(round) if round.is_running() => round,
            _ => return Err(GameError::invalid_state("submit a guess", self.screen)),
        };

        if !ScoringEngine::is_correct(text, &round.current_word) {
            debug!("Session {} wrong guess {:?}", self.id, text);
            self.display(DisplayField::Result, RETRY_MESSAGE);
            return Ok(GuessOutcome::Incorrect);
        }

        round.score = ScoringEngine::award(round.score, reward);
        let score = round.score;
        debug!("Session {} solved {}, score {}", self.id, round.current_word, score);

        self.display(DisplayField::Score, score.to_string());
        // Advancing clears the previous result, so the success message goes out after
        self.advance_word()?;
        self.display(DisplayField::Result, CORRECT_MESSAGE);
        Ok(GuessOutcome::Correct { score })
    }

    pub fn request_hint(&mut self) -> Result<(), GameError> {
        self.require_screen(Screen::Playing, "request a hint")?;

        let hint = self
            .round
            .as_ref()
            .and_then(|round| ScoringEngine::hint_for(&round.current_word));
        let message = match hint {
            Some(letter) => format!("First letter: {}", letter),
            None => NO_HINT_MESSAGE.to_string(),
        };

        self.display(DisplayField::Hint, message);
        Ok(())
    }

    /// Advance the countdown by one second. Ticks outside a running round change nothing.
    pub fn on_timer_tick(&mut self) -> TickOutcome {
        if self.screen != Screen::Playing {
            return TickOutcome::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return TickOutcome::Ignored;
        };

        let outcome = round.timer.tick();
        let timer_text = round.timer.display();
        let word = round.current_word.clone();

        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Ticked { .. } => {
                self.display(DisplayField::Timer, timer_text);
            }
            TickOutcome::Expired => {
                info!("Session {} round timed out", self.id);
                self.display(DisplayField::Timer, timer_text);
                self.publish(GameEvent::GuessInputToggled { enabled: false });
                self.display(
                    DisplayField::Result,
                    format!("Time's up! The word was: {}", word),
                );
                self.end_round(RoundEndReason::Timeout);
            }
        }

        outcome
    }

    fn end_round(&mut self, reason: RoundEndReason) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.timer.stop();

        let player_name = self
            .player
            .as_ref()
            .map(|player| player.name.clone())
            .unwrap_or_default();
        let record = ScoreRecord {
            player_name: player_name.clone(),
            score: round.score,
            duration_seconds: round.timer.elapsed(),
        };

        if let Err(e) = self.score_store.append_round_record(&record) {
            warn!("Session {} failed to record round: {:#}", self.id, e);
            self.display(
                DisplayField::Warning,
                format!("Could not save score history: {:#}", e),
            );
        }
        self.refresh_recent_records();

        let improved =
            ScoringEngine::improved_high_score(&self.high_score, &player_name, record.score);
        let new_high_score = improved.is_some();
        if let Some(entry) = improved {
            if let Err(e) = self.score_store.save_high_score(&entry) {
                warn!("Session {} failed to save high score: {:#}", self.id, e);
                self.display(
                    DisplayField::Warning,
                    format!("Could not save high score: {:#}", e),
                );
            }
            self.high_score = entry;
            let banner = self.high_score.to_string();
            self.display(DisplayField::HighScore, banner);
        }

        info!(
            "Session {} round ended ({:?}): {} scored {} in {}s",
            self.id, reason, record.player_name, record.score, record.duration_seconds
        );

        let outcome = RoundOutcome {
            reason,
            record: record.clone(),
            new_high_score,
        };
        self.last_outcome = Some(outcome);
        self.publish(GameEvent::RoundEnded {
            reason,
            record,
            new_high_score,
        });
        self.set_screen(Screen::RoundEnded);
    }

    /// Back to name entry from anywhere. The persisted high score survives.
    pub fn restart(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.timer.stop();
        }
        self.round = None;
        self.player = None;
        self.last_outcome = None;
        self.high_score = self.score_store.load_high_score();

        info!("Session {} restarted", self.id);

        self.display(DisplayField::JumbledWord, "");
        self.display(DisplayField::Result, "");
        self.display(DisplayField::Hint, "");
        self.display(DisplayField::Warning, "");
        self.display(DisplayField::Player, "");
        self.display(DisplayField::Score, "0");
        self.display(
            DisplayField::Timer,
            format_clock(self.settings.round_seconds),
        );
        let banner = self.high_score.to_string();
        self.display(DisplayField::HighScore, banner);
        self.publish(GameEvent::GuessInputToggled { enabled: true });
        self.set_screen(Screen::NamingPlayer);
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|round| round.difficulty)
    }

    pub fn score(&self) -> u32 {
        self.round.as_ref().map_or(0, |round| round.score)
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.round
            .as_ref()
            .map_or(self.settings.round_seconds, RoundState::seconds_remaining)
    }

    pub fn current_word(&self) -> Option<&str> {
        self.round
            .as_ref()
            .map(|round| round.current_word.as_str())
            .filter(|word| !word.is_empty())
    }

    pub fn scrambled_display(&self) -> Option<&str> {
        self.round
            .as_ref()
            .map(|round| round.scrambled_display.as_str())
            .filter(|word| !word.is_empty())
    }

    pub fn is_timer_running(&self) -> bool {
        self.round.as_ref().is_some_and(RoundState::is_running)
    }

    pub fn high_score(&self) -> &HighScoreEntry {
        &self.high_score
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn recent_records(&self) -> Vec<ScoreRecord> {
        self.score_store
            .load_recent_records(self.settings.recent_records_limit)
    }

    fn refresh_recent_records(&mut self) {
        let listing = self
            .recent_records()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        self.display(DisplayField::RecentRecords, listing);
    }

    fn require_screen(&self, expected: Screen, action: &str) -> Result<(), GameError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(GameError::invalid_state(action, self.screen))
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.publish(GameEvent::ScreenChanged { screen });
    }

    fn display(&mut self, field: DisplayField, value: impl Into<String>) {
        self.publish(GameEvent::DisplayUpdated {
            field,
            value: value.into(),
        });
    }

    fn publish(&mut self, event: GameEvent) {
        self.event_bus.publish(event);
    }
}
