use game_types::{Difficulty, GameError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything that can hand out the word list for a difficulty
pub trait WordSource {
    fn load(&self, difficulty: Difficulty) -> Result<Vec<String>, GameError>;
}

/// Parse a newline-delimited word list into unique uppercase words
pub fn parse_word_list(word_list: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    word_list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|word| {
            let alphabetic = is_alphabetic(word);
            if !alphabetic {
                debug!("Skipping non-alphabetic word list entry: {:?}", word);
            }
            alphabetic
        })
        .map(|word| word.to_uppercase())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Check if word contains only alphabetic characters
pub fn is_alphabetic(word: &str) -> bool {
    word.chars().all(|c| c.is_alphabetic())
}

fn unavailable(difficulty: Difficulty, reason: impl Into<String>) -> GameError {
    GameError::DataUnavailable {
        difficulty,
        reason: reason.into(),
    }
}

/// Word lists read from `<dir>/medium_words.txt` and `<dir>/hard_words.txt`
#[derive(Debug, Clone)]
pub struct DirectoryWordSource {
    dir: PathBuf,
}

impl DirectoryWordSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(difficulty.word_list_file())
    }
}

impl WordSource for DirectoryWordSource {
    fn load(&self, difficulty: Difficulty) -> Result<Vec<String>, GameError> {
        let path = self.path_for(difficulty);
        let contents = fs::read_to_string(&path)
            .map_err(|e| unavailable(difficulty, format!("{}: {}", path.display(), e)))?;

        let words = parse_word_list(&contents);
        if words.is_empty() {
            return Err(unavailable(
                difficulty,
                format!("{} has no usable words", path.display()),
            ));
        }

        debug!("Loaded {} {} words from {}", words.len(), difficulty, path.display());
        Ok(words)
    }
}

/// In-memory word lists
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    lists: HashMap<Difficulty, Vec<String>>,
}

impl StaticWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same list for every difficulty
    pub fn from_word_list(word_list: &str) -> Self {
        Difficulty::ALL
            .iter()
            .fold(Self::new(), |source, &difficulty| {
                source.with_words(difficulty, word_list)
            })
    }

    pub fn with_words(mut self, difficulty: Difficulty, word_list: &str) -> Self {
        self.lists.insert(difficulty, parse_word_list(word_list));
        self
    }
}

impl WordSource for StaticWordSource {
    fn load(&self, difficulty: Difficulty) -> Result<Vec<String>, GameError> {
        match self.lists.get(&difficulty) {
            Some(words) if !words.is_empty() => Ok(words.clone()),
            Some(_) => Err(unavailable(difficulty, "word list is empty")),
            None => Err(unavailable(difficulty, "no word list configured")),
        }
    }
}

/// Loads word lists and lays out the draw order for a round
pub struct WordBank {
    source: Box<dyn WordSource>,
}

impl WordBank {
    pub fn new(source: Box<dyn WordSource>) -> Self {
        Self { source }
    }

    pub fn load(&self, difficulty: Difficulty) -> Result<Vec<String>, GameError> {
        self.source.load(difficulty)
    }

    /// Uniformly random permutation of `words`
    pub fn draw_order<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Vec<String> {
        let mut order = words.to_vec();
        order.shuffle(rng);
        order
    }
}
