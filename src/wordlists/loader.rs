//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded list.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a line-delimited file
///
/// Blank lines, entries that are not purely alphabetic and repeated words
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a line-delimited word list
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    unique(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_slice;
/// use letter_boxed::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    unique(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

/// First occurrence of each word, in input order
fn unique(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    let mut repeats = 0usize;
    for word in words {
        if seen.insert(word.text().to_string()) {
            out.push(word);
        } else {
            repeats += 1;
        }
    }
    if repeats > 0 {
        log::debug!("Skipped {repeats} repeated dictionary entries");
    }
    out
}
