//! Dictionary filtering for a puzzle
//!
//! Keeps only the words that could ever appear in a solution: every letter on
//! the puzzle, and no two letters from the same side next to each other.

use crate::core::{Puzzle, SIDE_COUNT, Word};
use rayon::prelude::*;

/// Shortest word length used for chain finding
pub const MIN_WORD_LENGTH: usize = 3;

/// Below this many words the length floor relaxes by one
pub const MIN_WORDS_BEFORE_RELAXING: usize = 100;

/// Whether every letter of `word` is on the puzzle
#[inline]
#[must_use]
pub fn uses_only_puzzle_letters(word: &Word, puzzle: &Puzzle) -> bool {
    word.letters().is_subset(puzzle.letters())
}

/// Whether `word` places two letters of side `side` next to each other
#[must_use]
pub fn has_adjacent_from_side(word: &Word, puzzle: &Puzzle, side: usize) -> bool {
    let letters = puzzle.side_letters(side);
    word.bytes()
        .windows(2)
        .any(|pair| letters.contains(pair[0]) && letters.contains(pair[1]))
}

/// Whether `word` respects the side-adjacency rule for every side
#[must_use]
pub fn respects_sides(word: &Word, puzzle: &Puzzle) -> bool {
    word.bytes()
        .windows(2)
        .all(|pair| puzzle.allows_pair(pair[0], pair[1]))
}

/// Filter a dictionary down to the words playable on `puzzle`
///
/// Letter availability is checked first, then side adjacency side by side.
/// Dictionary order is preserved.
///
/// # Examples
/// ```
/// use letter_boxed::core::{Puzzle, Word};
/// use letter_boxed::solver::filter::filter_words;
///
/// let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
/// let words: Vec<Word> = ["LOCK", "LEAK", "TOE", "KITE"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let valid = filter_words(&words, &puzzle);
/// let texts: Vec<&str> = valid.iter().map(Word::text).collect();
/// assert_eq!(texts, vec!["LOCK", "KITE"]);
/// ```
#[must_use]
pub fn filter_words(words: &[Word], puzzle: &Puzzle) -> Vec<Word> {
    log::info!(
        "Eliminating words that contain a letter not in the puzzle ({})",
        puzzle.letters()
    );
    let mut remaining: Vec<Word> = words
        .par_iter()
        .filter(|word| uses_only_puzzle_letters(word, puzzle))
        .cloned()
        .collect();
    log::info!(
        "After eliminating unavailable letters, {} of {} words left",
        remaining.len(),
        words.len()
    );

    for side in 0..SIDE_COUNT {
        remaining = remaining
            .into_par_iter()
            .filter(|word| !has_adjacent_from_side(word, puzzle, side))
            .collect();
        log::info!(
            "After eliminating for side {}, {} words left",
            puzzle.sides()[side],
            remaining.len()
        );
    }

    remaining
}

/// Drop words shorter than [`MIN_WORD_LENGTH`], relaxing the floor by one if
/// fewer than [`MIN_WORDS_BEFORE_RELAXING`] words survive
///
/// Returns the kept words and the floor that was applied.
#[must_use]
pub fn apply_length_floor(words: &[Word]) -> (Vec<Word>, usize) {
    let mut min_length = MIN_WORD_LENGTH;
    let mut kept = words_at_least(words, min_length);

    if kept.len() < MIN_WORDS_BEFORE_RELAXING && min_length > 2 {
        log::info!(
            "Only {} words of length {min_length}+ found, including shorter words",
            kept.len()
        );
        min_length -= 1;
        kept = words_at_least(words, min_length);
    }

    log::info!(
        "Using {} words of length {min_length} or more for chain finding",
        kept.len()
    );
    (kept, min_length)
}

fn words_at_least(words: &[Word], min_length: usize) -> Vec<Word> {
    words
        .iter()
        .filter(|word| word.len() >= min_length)
        .cloned()
        .collect()
}
