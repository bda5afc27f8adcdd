#![allow(dead_code)]

use game_core::GameSession;
use game_host::{build_session, config::Config, terminal::TerminalDisplay};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Terminal output captured for assertions
#[derive(Clone, Default)]
pub struct SharedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn write_words(dir: &Path, medium: &str) {
    let words = dir.join("words");
    std::fs::create_dir_all(&words).unwrap();
    std::fs::write(words.join("medium_words.txt"), medium).unwrap();
}

pub fn test_config(dir: &Path, round_seconds: u32) -> Config {
    Config {
        words_directory: dir.join("words"),
        high_score_file: dir.join("highscore.txt"),
        score_history_file: dir.join("scores.txt"),
        round_seconds,
        ..Config::default()
    }
}

/// Session over a temp directory with a terminal display attached
pub fn create_host_session(medium_words: &str, round_seconds: u32) -> (TempDir, GameSession, SharedOutput) {
    let dir = TempDir::new().unwrap();
    write_words(dir.path(), medium_words);

    let output = SharedOutput::default();
    let mut session = build_session(&test_config(dir.path(), round_seconds)).with_seed(7);
    session.add_handler(Box::new(TerminalDisplay::new(output.clone())));
    session.publish_initial_state();

    (dir, session, output)
}
