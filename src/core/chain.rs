//! Word chains
//!
//! A chain is an ordered sequence of words where each word starts with the
//! last letter of the previous one.

use super::{LetterSet, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered sequence of linked words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    words: Vec<Word>,
}

impl Chain {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union of the letter sets of every word
    #[must_use]
    pub fn letters_used(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letters()))
    }

    /// Occurrences of each letter across the whole chain
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in &self.words {
            for (letter, count) in word.letter_counts() {
                *counts.entry(letter).or_insert(0) += count;
            }
        }
        counts
    }

    /// Letter occurrences beyond the first, summed over all letters
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Chain, Word};
    ///
    /// let chain = Chain::new(vec![Word::new("LOCK").unwrap(), Word::new("KITE").unwrap()]);
    /// assert_eq!(chain.redundancy(), 1); // K appears twice
    /// ```
    #[must_use]
    pub fn redundancy(&self) -> usize {
        self.letter_counts()
            .values()
            .map(|&count| count.saturating_sub(1))
            .sum()
    }

    /// Total letter occurrences, counting repeats
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    /// Whether every word starts with the previous word's last letter
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| pair[0].last_letter() == pair[1].first_letter())
    }

    /// Whether any word appears more than once
    #[must_use]
    pub fn has_repeated_word(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .any(|(i, word)| self.words[..i].contains(word))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(words: &[&str]) -> Chain {
        Chain::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn letters_used_is_union() {
        let c = chain(&["LOCK", "KITE"]);
        assert_eq!(c.letters_used(), LetterSet::from_ascii(b"LOCKITE"));
        assert_eq!(c.letters_used().len(), 6);
    }

    #[test]
    fn redundancy_counts_extra_occurrences() {
        let c = chain(&["LUXE", "EVICTS", "SKY", "YOLK"]);
        // L, E, S, K, Y each appear twice
        assert_eq!(c.redundancy(), 5);
        assert_eq!(c.total_letters(), 17);
    }

    #[test]
    fn redundancy_within_single_word() {
        assert_eq!(chain(&["LEVEL"]).redundancy(), 2);
        assert_eq!(chain(&["KITE"]).redundancy(), 0);
    }

    #[test]
    fn linked_chain() {
        assert!(chain(&["LOCK", "KITE", "EXIT"]).is_linked());
        assert!(!chain(&["LOCK", "EXIT"]).is_linked());
        assert!(chain(&["LOCK"]).is_linked());
        assert!(chain(&[]).is_linked());
    }

    #[test]
    fn repeated_word_detection() {
        assert!(!chain(&["LOCK", "KITE"]).has_repeated_word());
        assert!(chain(&["KICK", "KICK"]).has_repeated_word());
    }

    #[test]
    fn chain_display() {
        assert_eq!(chain(&["LOCK", "KITE"]).to_string(), "LOCK → KITE");
        assert_eq!(chain(&[]).to_string(), "");
    }
}
