use game_types::HighScoreEntry;

/// Points awarded per correctly unscrambled word
pub const REWARD_UNIT: u32 = 10;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Normalize raw guess input the same way words are stored
    pub fn normalize_guess(text: &str) -> String {
        text.trim().to_uppercase()
    }

    /// Exact, case-insensitive whole word comparison
    pub fn is_correct(guess: &str, target: &str) -> bool {
        !target.is_empty() && Self::normalize_guess(guess) == target.to_uppercase()
    }

    /// Score after a correct guess
    pub fn award(score: u32, reward: u32) -> u32 {
        score.saturating_add(reward)
    }

    /// First letter of the current word, if there is one
    pub fn hint_for(word: &str) -> Option<char> {
        word.chars().next()
    }

    /// The entry to persist if `score` beats the current best
    pub fn improved_high_score(
        current: &HighScoreEntry,
        player_name: &str,
        score: u32,
    ) -> Option<HighScoreEntry> {
        current.is_beaten_by(score).then(|| HighScoreEntry {
            player_name: player_name.to_string(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_comparison_ignores_case_and_whitespace() {
        assert!(ScoringEngine::is_correct(" cat ", "CAT"));
        assert!(ScoringEngine::is_correct("Cat", "CAT"));
        assert!(ScoringEngine::is_correct("CAT\n", "cat"));
        assert!(!ScoringEngine::is_correct("ca t", "CAT"));
        assert!(!ScoringEngine::is_correct("CATS", "CAT"));
        assert!(!ScoringEngine::is_correct("", ""));
    }

    #[test]
    fn test_award() {
        assert_eq!(ScoringEngine::award(0, REWARD_UNIT), 10);
        assert_eq!(ScoringEngine::award(20, REWARD_UNIT), 30);
        assert_eq!(ScoringEngine::award(u32::MAX, REWARD_UNIT), u32::MAX);
    }

    #[test]
    fn test_hint() {
        assert_eq!(ScoringEngine::hint_for("FROG"), Some('F'));
        assert_eq!(ScoringEngine::hint_for(""), None);
    }

    #[test]
    fn test_high_score_only_on_strict_improvement() {
        let current = HighScoreEntry {
            player_name: "Alice".to_string(),
            score: 20,
        };

        assert!(ScoringEngine::improved_high_score(&current, "Bob", 10).is_none());
        assert!(ScoringEngine::improved_high_score(&current, "Bob", 20).is_none());

        let improved = ScoringEngine::improved_high_score(&current, "Bob", 30).unwrap();
        assert_eq!(improved.player_name, "Bob");
        assert_eq!(improved.score, 30);
    }

    #[test]
    fn test_zero_score_never_beats_default() {
        let current = HighScoreEntry::default();
        assert!(ScoringEngine::improved_high_score(&current, "Alice", 0).is_none());
    }
}
