use game_core::{DirectoryWordSource, GameSession};
use game_persistence::FileScoreStore;

use crate::config::Config;

pub mod commands;
pub mod config;
pub mod driver;
pub mod terminal;

/// Wire a session to the word lists and score files named in `config`
pub fn build_session(config: &Config) -> GameSession {
    let word_source = DirectoryWordSource::new(&config.words_directory);
    let score_store = FileScoreStore::new(&config.high_score_file, &config.score_history_file);

    GameSession::new(
        Box::new(word_source),
        Box::new(score_store),
        config.game_settings(),
    )
}
