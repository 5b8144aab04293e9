//! Bounded depth-first chain search
//!
//! Explores chains of linked words, tracking the letters covered so far, and
//! keeps every chain tied for best under the ordering:
//! 1. fewer words
//! 2. lower redundancy
//! 3. lower summed complexity (only with the simplicity preference)
//!
//! Branch ordering is a pure speed heuristic. The depth bound and the
//! branch-and-bound rule below are the only things that cut the search.

use super::heuristics::{extension_score_with_complexity, starting_word_score, word_complexity};
use crate::core::{Chain, LetterSet, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::ops::ControlFlow;
use std::time::Instant;

/// Observers are polled for progress every this many visited nodes
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Default maximum number of words in a chain
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 4;

/// Branch-and-bound rule applied once a solution of length `L` is known
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pruning {
    /// Abandon incomplete branches at length `L - 1` or more.
    ///
    /// Apart from the remaining extensions of the partial chain that produced
    /// the bound, only strictly shorter chains can still be found.
    #[default]
    Strict,
    /// Abandon incomplete branches at length `L` or more.
    ///
    /// Every chain of length `L` is still reached and the redundancy and
    /// complexity tie-breaks pick among all of them.
    KeepTies,
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_chain_length: usize,
    pub prefer_simple: bool,
    pub pruning: Pruning,
}

impl SearchConfig {
    #[must_use]
    pub const fn new(max_chain_length: usize, prefer_simple: bool) -> Self {
        Self {
            max_chain_length,
            prefer_simple,
            pruning: Pruning::Strict,
        }
    }

    #[must_use]
    pub const fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHAIN_LENGTH, true)
    }
}

/// How a newly found complete chain relates to the retained set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Improvement {
    /// Fewer words than anything found so far
    Shorter,
    /// Same length, wins on redundancy or complexity
    Better,
    /// Same length, same scores: kept alongside the others
    Equivalent,
}

/// Hooks into a running search
///
/// `on_progress` is the only way to stop a search early; the engine itself
/// has no clock.
pub trait SearchObserver {
    /// Called whenever a chain enters the retained best set
    fn on_solution(&mut self, _chain: &Chain, _improvement: Improvement) {}

    /// Called every [`PROGRESS_INTERVAL`] visited nodes; `Break` aborts the search
    fn on_progress(&mut self, _explored: usize) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Observer that never interrupts
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// A complete chain with the scores used to compare it
#[derive(Debug, Clone)]
pub struct ScoredChain {
    pub chain: Chain,
    pub redundancy: usize,
    /// Summed word complexity, or 0 without the simplicity preference
    pub complexity: f64,
}

impl ScoredChain {
    /// Ordering used to pick best solutions (`Less` is better)
    fn compare(&self, other: &Self) -> Ordering {
        self.chain
            .len()
            .cmp(&other.chain.len())
            .then(self.redundancy.cmp(&other.redundancy))
            .then(self.complexity.total_cmp(&other.complexity))
    }
}

/// Outcome of one search invocation
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Every chain tied for best, in discovery order
    pub solutions: Vec<ScoredChain>,
    /// Number of nodes visited
    pub explored: usize,
    /// True if an observer stopped the search early
    pub aborted: bool,
}

impl SearchReport {
    /// The chains without their scores
    #[must_use]
    pub fn chains(&self) -> Vec<Chain> {
        self.solutions.iter().map(|s| s.chain.clone()).collect()
    }
}

/// Find every best chain covering `all_letters` with default observation
///
/// # Examples
/// ```
/// use letter_boxed::core::{LetterSet, Word};
/// use letter_boxed::solver::search::{search, SearchConfig};
///
/// let words: Vec<Word> = ["LUXE", "EVICTS", "SKY", "YOLK"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let letters = LetterSet::from_ascii(b"LEIXYSCUVKOT");
///
/// let chains = search(&words, letters, &SearchConfig::default());
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].to_string(), "LUXE → EVICTS → SKY → YOLK");
/// ```
#[must_use]
pub fn search(words: &[Word], all_letters: LetterSet, config: &SearchConfig) -> Vec<Chain> {
    ChainSearch::new(words, all_letters, *config)
        .run(&mut NoopObserver)
        .chains()
}

/// Search state for one invocation
///
/// Owns its first-letter index and best-solution accumulator, so separate
/// searches share nothing.
pub struct ChainSearch<'a> {
    words: &'a [Word],
    all_letters: LetterSet,
    config: SearchConfig,
    /// Word complexity, computed once per word
    complexity: Vec<f64>,
    /// First letter -> indices of words starting with it
    by_first_letter: FxHashMap<u8, Vec<usize>>,
    best: Vec<ScoredChain>,
    explored: usize,
}

impl<'a> ChainSearch<'a> {
    #[must_use]
    pub fn new(words: &'a [Word], all_letters: LetterSet, config: SearchConfig) -> Self {
        let complexity = words.iter().map(word_complexity).collect();

        let mut by_first_letter: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_first_letter
                .entry(word.first_letter())
                .or_default()
                .push(index);
        }

        Self {
            words,
            all_letters,
            config,
            complexity,
            by_first_letter,
            best: Vec::new(),
            explored: 0,
        }
    }

    /// Run the search to completion (or until the observer breaks)
    pub fn run<O: SearchObserver>(mut self, observer: &mut O) -> SearchReport {
        let start = Instant::now();
        let mut path = Vec::with_capacity(self.config.max_chain_length);

        let aborted = self
            .explore(&mut path, LetterSet::EMPTY, observer)
            .is_break();

        log::info!(
            "Finished exploring {} chains in {:.2} seconds{}",
            self.explored,
            start.elapsed().as_secs_f64(),
            if aborted { " (aborted)" } else { "" }
        );

        SearchReport {
            solutions: self.best,
            explored: self.explored,
            aborted,
        }
    }

    fn best_length(&self) -> Option<usize> {
        self.best.first().map(|s| s.chain.len())
    }

    fn explore<O: SearchObserver>(
        &mut self,
        path: &mut Vec<usize>,
        used: LetterSet,
        observer: &mut O,
    ) -> ControlFlow<()> {
        self.explored += 1;
        if self.explored % PROGRESS_INTERVAL == 0 {
            log::debug!("Explored {} chains...", self.explored);
            observer.on_progress(self.explored)?;
        }

        if used == self.all_letters {
            self.record(path, observer);
            return ControlFlow::Continue(());
        }

        if path.len() >= self.config.max_chain_length {
            return ControlFlow::Continue(());
        }

        if let Some(best) = self.best_length() {
            let cutoff = match self.config.pruning {
                Pruning::Strict => best.saturating_sub(1),
                Pruning::KeepTies => best,
            };
            if path.len() >= cutoff {
                return ControlFlow::Continue(());
            }
        }

        for next in self.candidates(path, used) {
            path.push(next);
            let result = self.explore(path, used.union(self.words[next].letters()), observer);
            path.pop();
            result?;
        }

        ControlFlow::Continue(())
    }

    /// Next words to try from this node, best heuristic score first
    fn candidates(&self, path: &[usize], used: LetterSet) -> Vec<usize> {
        let prefer_simple = self.config.prefer_simple;

        let mut scored: Vec<(usize, f64)> = match path.last() {
            None => (0..self.words.len())
                .map(|i| (i, starting_word_score(&self.words[i], prefer_simple)))
                .collect(),
            Some(&last) => {
                let link = self.words[last].last_letter();
                self.by_first_letter
                    .get(&link)
                    .map(|indices| {
                        indices
                            .iter()
                            .filter(|&&i| !self.in_path(path, i))
                            .map(|&i| {
                                let score = extension_score_with_complexity(
                                    &self.words[i],
                                    used,
                                    self.all_letters,
                                    prefer_simple.then_some(self.complexity[i]),
                                );
                                (i, score)
                            })
                            .collect()
                    })
                    .unwrap_or_default()
            }
        };

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().map(|(i, _)| i).collect()
    }

    /// True if `index` or an identical word is already in the chain
    fn in_path(&self, path: &[usize], index: usize) -> bool {
        path.iter().any(|&p| self.words[p] == self.words[index])
    }

    fn record<O: SearchObserver>(&mut self, path: &[usize], observer: &mut O) {
        let chain = Chain::new(path.iter().map(|&i| self.words[i].clone()).collect());
        let redundancy = chain.redundancy();
        let complexity = if self.config.prefer_simple {
            path.iter().map(|&i| self.complexity[i]).sum()
        } else {
            0.0
        };
        let candidate = ScoredChain {
            chain,
            redundancy,
            complexity,
        };

        // Every retained chain has identical scores, so comparing to one suffices
        let improvement = match self.best.first().map(|b| candidate.compare(b)) {
            None => Improvement::Shorter,
            Some(Ordering::Less) if candidate.chain.len() < self.best[0].chain.len() => {
                Improvement::Shorter
            }
            Some(Ordering::Less) => Improvement::Better,
            Some(Ordering::Equal) => Improvement::Equivalent,
            Some(Ordering::Greater) => return,
        };

        let label = match improvement {
            Improvement::Shorter => "solution",
            Improvement::Better => "better solution",
            Improvement::Equivalent => "equivalent solution",
        };
        log::info!(
            "Found {label} with {} words: {} (redundancy: {})",
            candidate.chain.len(),
            candidate.chain,
            candidate.redundancy
        );

        if improvement != Improvement::Equivalent {
            self.best.clear();
        }
        observer.on_solution(&candidate.chain, improvement);
        self.best.push(candidate);
    }
}
