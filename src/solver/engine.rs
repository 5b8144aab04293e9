//! Main Letter Boxed solver interface

use super::filter::{apply_length_floor, filter_words};
use super::heuristics::select_top_words;
use super::search::{ChainSearch, SearchConfig, SearchObserver, SearchReport};
use crate::core::{LetterSet, Puzzle, Word};

/// Which candidate words a search may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordScope {
    /// The `n` best words by subset score
    Top(usize),
    /// Every playable word
    All,
}

/// Main Letter Boxed solver
///
/// Holds the dictionary; every puzzle gets its own [`Candidates`].
pub struct Solver<'a> {
    dictionary: &'a [Word],
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Filter the dictionary for `puzzle` and apply the word-length floor
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Puzzle, Word};
    /// use letter_boxed::solver::{SearchConfig, Solver, WordScope};
    /// use letter_boxed::solver::search::NoopObserver;
    ///
    /// let dictionary: Vec<Word> = ["LUXE", "EVICTS", "SKY", "YOLK", "TOE"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
    ///
    /// let candidates = Solver::new(&dictionary).prepare(&puzzle);
    /// assert_eq!(candidates.playable_count(), 4);
    ///
    /// let report = candidates.search(WordScope::All, SearchConfig::default(), &mut NoopObserver);
    /// assert_eq!(report.solutions.len(), 1);
    /// ```
    #[must_use]
    pub fn prepare(&self, puzzle: &Puzzle) -> Candidates {
        let playable = filter_words(self.dictionary, puzzle);
        let (words, min_length) = apply_length_floor(&playable);

        Candidates {
            letters: puzzle.letters(),
            playable_count: playable.len(),
            words,
            min_length,
        }
    }
}

/// Words usable for one puzzle, ready to search
#[derive(Debug, Clone)]
pub struct Candidates {
    letters: LetterSet,
    playable_count: usize,
    words: Vec<Word>,
    min_length: usize,
}

impl Candidates {
    /// Words passing the dictionary filter and length floor
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words passing the dictionary filter, before the length floor
    #[must_use]
    pub const fn playable_count(&self) -> usize {
        self.playable_count
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words a search over `scope` would use
    #[must_use]
    pub fn scope_size(&self, scope: WordScope) -> usize {
        match scope {
            WordScope::Top(n) => n.min(self.words.len()),
            WordScope::All => self.words.len(),
        }
    }

    /// Run one chain search over `scope`
    pub fn search<O: SearchObserver>(
        &self,
        scope: WordScope,
        config: SearchConfig,
        observer: &mut O,
    ) -> SearchReport {
        match scope {
            WordScope::Top(n) => {
                let subset = select_top_words(&self.words, n, config.prefer_simple);
                log::info!("Searching a subset of {} words", subset.len());
                ChainSearch::new(&subset, self.letters, config).run(observer)
            }
            WordScope::All => {
                log::info!("Searching all {} words", self.words.len());
                ChainSearch::new(&self.words, self.letters, config).run(observer)
            }
        }
    }
}
