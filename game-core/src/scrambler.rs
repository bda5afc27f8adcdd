use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle attempts before falling back to a fixed swap
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 3;

/// Produce a random letter permutation of `word`.
///
/// Words with at least two distinct letters always come back changed: after
/// `MAX_SCRAMBLE_ATTEMPTS` identity shuffles the first pair of differing
/// letters is swapped instead.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    let mut letters = original.clone();

    if !has_distinct_letters(&original) {
        return word.to_string();
    }

    for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    swap_first_distinct(&mut letters);
    letters.into_iter().collect()
}

fn swap_first_distinct(letters: &mut [char]) {
    let Some(&first) = letters.first() else {
        return;
    };
    if let Some(other) = letters.iter().position(|&c| c != first) {
        letters.swap(0, other);
    }
}

fn has_distinct_letters(letters: &[char]) -> bool {
    letters.windows(2).any(|pair| pair[0] != pair[1])
}
