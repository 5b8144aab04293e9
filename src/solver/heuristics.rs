//! Branch-ordering heuristics
//!
//! Every score here only decides the order in which the search visits
//! branches, or which words make the first-pass subset. None of them affect
//! whether a chain counts as a solution.

use crate::core::{LetterSet, Word};
use rayon::prelude::*;

/// Letters that make a word harder (+2 each)
pub const RARE_LETTERS: LetterSet = LetterSet::from_ascii(b"JQXZVBKWYPGFM");

/// Letters that make a word easier (no penalty); everything else costs +1
pub const COMMON_LETTERS: LetterSet = LetterSet::from_ascii(b"ETAOINSRHLDCU");

const VOWELS: LetterSet = LetterSet::from_ascii(b"AEIOU");

/// Bonus for an extension that covers every remaining letter
pub const COMPLETION_BONUS: f64 = 50.0;

/// Length and letter cost of a word, without the run penalty
///
/// Half a point per letter, plus 2 per rare letter and 1 per letter that is
/// neither rare nor common. This is the complexity the display score uses.
#[must_use]
pub fn letter_complexity(word: &Word) -> f64 {
    let length_score = word.len() as f64 * 0.5;

    let letter_score: u32 = word
        .bytes()
        .iter()
        .map(|&letter| {
            if RARE_LETTERS.contains(letter) {
                2
            } else if COMMON_LETTERS.contains(letter) {
                0
            } else {
                1
            }
        })
        .sum();

    length_score + f64::from(letter_score)
}

/// Complexity of a word (lower is simpler)
///
/// [`letter_complexity`] plus 1 per position that sits inside a run of 3+
/// vowels or 3+ consonants.
///
/// # Examples
/// ```
/// use letter_boxed::core::Word;
/// use letter_boxed::solver::heuristics::word_complexity;
///
/// let kite = Word::new("KITE").unwrap();
/// assert!((word_complexity(&kite) - 4.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn word_complexity(word: &Word) -> f64 {
    let mut pattern_score = 0u32;
    let mut vowel_run = 0;
    let mut consonant_run = 0;
    for &letter in word.bytes() {
        if VOWELS.contains(letter) {
            vowel_run += 1;
            consonant_run = 0;
        } else {
            consonant_run += 1;
            vowel_run = 0;
        }

        if vowel_run >= 3 || consonant_run >= 3 {
            pattern_score += 1;
        }
    }

    letter_complexity(word) + f64::from(pattern_score)
}

/// Score for a word at the root of the search (higher is explored first)
#[must_use]
pub fn starting_word_score(word: &Word, prefer_simple: bool) -> f64 {
    let base = word.letters().len() as f64 * 5.0;
    if prefer_simple {
        base - word_complexity(word)
    } else {
        base
    }
}

/// Score for extending a partial chain with `candidate` (higher is explored first)
///
/// `used` is the letter set covered so far and `all` the puzzle's letters.
#[must_use]
pub fn extension_score(
    candidate: &Word,
    used: LetterSet,
    all: LetterSet,
    prefer_simple: bool,
) -> f64 {
    let complexity = prefer_simple.then(|| word_complexity(candidate));
    extension_score_with_complexity(candidate, used, all, complexity)
}

/// [`extension_score`] with the candidate's complexity already known
///
/// `None` ignores complexity, as `prefer_simple = false` does.
#[must_use]
pub fn extension_score_with_complexity(
    candidate: &Word,
    used: LetterSet,
    all: LetterSet,
    complexity: Option<f64>,
) -> f64 {
    let new_letters = candidate.letters().difference(used);
    let redundant_letters = candidate.len() - new_letters.len();

    let mut score = new_letters.len() as f64 * 8.0 - redundant_letters as f64 * 2.0;
    if let Some(complexity) = complexity {
        score -= complexity;
    }

    if new_letters.is_superset(all.difference(used)) {
        score += COMPLETION_BONUS;
    }

    score
}

/// Score used to pick the first-pass subset of words (higher is kept)
///
/// With the simplicity preference, favors many distinct letters, reasonable
/// length and common letters. Without it, only distinct letters count.
#[must_use]
pub fn subset_score(word: &Word, prefer_simple: bool) -> f64 {
    let distinct = word.letters().len() as f64;
    if !prefer_simple {
        return distinct;
    }

    let mut simplicity = 0.0;
    if word.len() <= 6 {
        simplicity += 2.0;
    }
    if word.len() <= 8 {
        simplicity += 1.0;
    }
    let common = word
        .bytes()
        .iter()
        .filter(|&&letter| COMMON_LETTERS.contains(letter))
        .count();
    simplicity += common as f64 * 0.1;

    distinct * 3.0 + simplicity
}

/// The `limit` best words by [`subset_score`], in descending score order
///
/// Ties keep their dictionary order.
#[must_use]
pub fn select_top_words(words: &[Word], limit: usize, prefer_simple: bool) -> Vec<Word> {
    let mut scored: Vec<(f64, &Word)> = words
        .par_iter()
        .map(|word| (subset_score(word, prefer_simple), word))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, word)| word.clone())
        .collect()
}

/// Words sorted by distinct-letter count, most first
#[must_use]
pub fn rank_by_unique_letters(words: &[Word]) -> Vec<(&Word, usize)> {
    let mut ranked: Vec<(&Word, usize)> = words
        .iter()
        .map(|word| (word, word.letters().len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn complexity_common_letters_only() {
        // 4 letters * 0.5, all common, no runs
        assert_close(word_complexity(&word("TIDE")), 2.0);
    }

    #[test]
    fn complexity_rare_and_neutral_letters() {
        // KITE: 2.0 length + K rare (2)
        assert_close(word_complexity(&word("KITE")), 4.0);
        // Q is rare (2), no letter is neutral in QUIT
        assert_close(word_complexity(&word("QUIT")), 4.0);
    }

    #[test]
    fn complexity_consonant_run() {
        // STRENGTH: S T R E N G T H
        // length 4.0; G rare = 2; runs: STR -> +1 at R; NGTH -> +1 at T, +1 at H
        assert_close(word_complexity(&word("STRENGTH")), 4.0 + 2.0 + 3.0);
    }

    #[test]
    fn complexity_vowel_run() {
        // QUEUE: length 2.5; Q rare 2; U E U E vowel run of 4 -> +2
        assert_close(word_complexity(&word("QUEUE")), 2.5 + 2.0 + 2.0);
    }

    #[test]
    fn complexity_y_is_a_consonant() {
        // SKY: length 1.5; K, Y rare = 4; S K Y run of 3 -> +1
        assert_close(word_complexity(&word("SKY")), 1.5 + 4.0 + 1.0);
    }

    #[test]
    fn letter_complexity_ignores_runs() {
        // SKY: length 1.5; K, Y rare = 4; the SKY run is not counted
        assert_close(letter_complexity(&word("SKY")), 5.5);
        assert_close(word_complexity(&word("SKY")) - letter_complexity(&word("SKY")), 1.0);
        assert_close(letter_complexity(&word("KITE")), word_complexity(&word("KITE")));
    }

    #[test]
    fn starting_score_with_and_without_preference() {
        let kite = word("KITE");
        assert_close(starting_word_score(&kite, false), 20.0);
        assert_close(starting_word_score(&kite, true), 16.0);
    }

    #[test]
    fn extension_score_counts_new_and_redundant_letters() {
        let used = LetterSet::from_ascii(b"LOCK");
        let all = LetterSet::from_ascii(b"LOCKITEXSYUV");
        // KITE adds I, T, E; K is redundant
        let score = extension_score(&word("KITE"), used, all, false);
        assert_close(score, 3.0 * 8.0 - 2.0);
    }

    #[test]
    fn extension_score_completion_bonus() {
        let used = LetterSet::from_ascii(b"LOCK");
        let all = LetterSet::from_ascii(b"LOCKITE");
        let score = extension_score(&word("KITE"), used, all, false);
        assert_close(score, 3.0 * 8.0 - 2.0 + COMPLETION_BONUS);
    }

    #[test]
    fn extension_score_subtracts_complexity_when_preferred() {
        let used = LetterSet::from_ascii(b"LOCK");
        let all = LetterSet::from_ascii(b"LOCKITEXSYUV");
        let kite = word("KITE");
        let plain = extension_score(&kite, used, all, false);
        let simple = extension_score(&kite, used, all, true);
        assert_close(plain - simple, word_complexity(&kite));
    }

    #[test]
    fn cached_complexity_gives_the_same_extension_score() {
        let used = LetterSet::from_ascii(b"LOCK");
        let all = LetterSet::from_ascii(b"LOCKITEXSYUV");
        let kite = word("KITE");

        assert_close(
            extension_score_with_complexity(&kite, used, all, Some(word_complexity(&kite))),
            extension_score(&kite, used, all, true),
        );
        assert_close(
            extension_score_with_complexity(&kite, used, all, None),
            extension_score(&kite, used, all, false),
        );
    }

    #[test]
    fn subset_score_technical_is_distinct_count() {
        assert_close(subset_score(&word("LEVEL"), false), 3.0);
    }

    #[test]
    fn subset_score_simple_mix() {
        // EVICTS: 6 distinct * 3 = 18; len 6 -> +3; common E, I, C, T, S -> +0.5
        assert_close(subset_score(&word("EVICTS"), true), 18.0 + 3.0 + 0.5);
    }

    #[test]
    fn select_top_words_keeps_best_in_order() {
        let words = vec![word("SKY"), word("EVICTS"), word("LUXE"), word("YOLK")];
        let top = select_top_words(&words, 2, false);
        let texts: Vec<&str> = top.iter().map(Word::text).collect();
        // LUXE and YOLK tie on 4 distinct letters; dictionary order breaks the tie
        assert_eq!(texts, vec!["EVICTS", "LUXE"]);
    }

    #[test]
    fn select_top_words_limit_larger_than_input() {
        let words = vec![word("SKY")];
        assert_eq!(select_top_words(&words, 500, true).len(), 1);
    }

    #[test]
    fn rank_by_unique_letters_descending() {
        let words = vec![word("SKY"), word("EVICTS"), word("LEVEL")];
        let ranked = rank_by_unique_letters(&words);
        let counts: Vec<usize> = ranked.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![6, 3, 3]);
        assert_eq!(ranked[0].0.text(), "EVICTS");
    }
}
