#![allow(dead_code)]

use anyhow::{Result, anyhow};
use game_core::{GameEvent, GameEventHandler, GameSession, GameSettings, StaticWordSource};
use game_persistence::{MemoryScoreStore, ScoreStore};
use game_types::{Difficulty, DisplayField, HighScoreEntry, ScoreRecord, Screen};
use std::sync::{Arc, Mutex};

pub const TEST_SEED: u64 = 2024;

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }

    /// Last value published for a display field
    pub fn last_display(&self, field: DisplayField) -> Option<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|event| match event {
                GameEvent::DisplayUpdated { field: f, value } if *f == field => {
                    Some(value.clone())
                }
                _ => None,
            })
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                GameEvent::ScreenChanged { screen } => Some(*screen),
                _ => None,
            })
            .collect()
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Memory store the test keeps a handle to after the session takes ownership
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MemoryScoreStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(name: &str, score: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryScoreStore::with_high_score(
                HighScoreEntry {
                    player_name: name.to_string(),
                    score,
                },
            ))),
        }
    }

    pub fn history(&self) -> Vec<ScoreRecord> {
        self.inner.lock().unwrap().history().to_vec()
    }

    pub fn high_score(&self) -> HighScoreEntry {
        self.inner.lock().unwrap().load_high_score()
    }
}

impl ScoreStore for SharedStore {
    fn load_high_score(&self) -> HighScoreEntry {
        self.inner.lock().unwrap().load_high_score()
    }

    fn save_high_score(&mut self, entry: &HighScoreEntry) -> Result<()> {
        self.inner.lock().unwrap().save_high_score(entry)
    }

    fn append_round_record(&mut self, record: &ScoreRecord) -> Result<()> {
        self.inner.lock().unwrap().append_round_record(record)
    }

    fn load_recent_records(&self, limit: usize) -> Vec<ScoreRecord> {
        self.inner.lock().unwrap().load_recent_records(limit)
    }
}

/// Store whose disk is always full
pub struct FailingStore;

impl ScoreStore for FailingStore {
    fn load_high_score(&self) -> HighScoreEntry {
        HighScoreEntry::default()
    }

    fn save_high_score(&mut self, _entry: &HighScoreEntry) -> Result<()> {
        Err(anyhow!("disk full"))
    }

    fn append_round_record(&mut self, _record: &ScoreRecord) -> Result<()> {
        Err(anyhow!("disk full"))
    }

    fn load_recent_records(&self, _limit: usize) -> Vec<ScoreRecord> {
        Vec::new()
    }
}

/// Creates a seeded session over `word_list` with a collector attached
pub fn create_session_with_store(
    word_list: &str,
    store: impl ScoreStore + 'static,
) -> (GameSession, EventCollector) {
    let collector = EventCollector::new();
    let mut session = GameSession::new(
        Box::new(StaticWordSource::from_word_list(word_list)),
        Box::new(store),
        GameSettings::default(),
    )
    .with_seed(TEST_SEED);
    session.add_handler(Box::new(collector.clone()));
    (session, collector)
}

pub fn create_session(word_list: &str) -> (GameSession, EventCollector, SharedStore) {
    let store = SharedStore::new();
    let (session, collector) = create_session_with_store(word_list, store.clone());
    (session, collector, store)
}

/// Name the player and start a medium round
pub fn start_round(session: &mut GameSession, name: &str) {
    session.submit_name(name).expect("name should be accepted");
    session
        .select_difficulty_and_start(Difficulty::Medium)
        .expect("round should start");
}

/// Guess the current word correctly
pub fn solve_current(session: &mut GameSession) {
    let word = session
        .current_word()
        .expect("a word should be in play")
        .to_lowercase();
    session.submit_guess(&word).expect("guess should be accepted");
}

pub fn tick_times(session: &mut GameSession, ticks: u32) {
    for _ in 0..ticks {
        session.on_timer_tick();
    }
}
