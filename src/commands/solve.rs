//! Puzzle solving command
//!
//! Runs the subset search and, when it comes back empty, the escalation
//! steps: every candidate word, then one more word per chain.

use crate::core::Puzzle;
use crate::solver::search::DEFAULT_MAX_CHAIN_LENGTH;
use crate::solver::{
    Candidates, Pruning, RankedSolution, SearchConfig, SearchObserver, SearchReport, Solver,
    WordScope, rank_solutions,
};
use std::fmt;
use std::time::Duration;

/// Words searched on the first attempt
pub const DEFAULT_SUBSET_SIZE: usize = 500;
/// Searching every candidate is only offered below this many words
pub const ESCALATION_WORD_LIMIT: usize = 3000;
/// Longer chains are only offered while the bound is below this
pub const ESCALATION_MAX_CHAIN: usize = 5;

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    pub max_chain_length: usize,
    pub prefer_simple: bool,
    /// `None` searches every candidate from the start
    pub subset_size: Option<usize>,
    pub escalate: bool,
    pub pruning: Pruning,
    /// Wall-clock budget for the whole solve, enforced by the observer
    pub timeout: Option<Duration>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
            prefer_simple: true,
            subset_size: Some(DEFAULT_SUBSET_SIZE),
            escalate: false,
            pruning: Pruning::Strict,
            timeout: None,
        }
    }

    /// Scope of the first attempt
    #[must_use]
    pub const fn first_scope(&self) -> WordScope {
        match self.subset_size {
            Some(n) => WordScope::Top(n),
            None => WordScope::All,
        }
    }

    /// Search parameters for an attempt bounded at `max_chain_length` words
    #[must_use]
    pub const fn search_config(&self, max_chain_length: usize) -> SearchConfig {
        SearchConfig::new(max_chain_length, self.prefer_simple).with_pruning(self.pruning)
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A wider search tried after an empty result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Every candidate word instead of the top subset
    AllWords,
    /// Every candidate word with a raised chain bound
    LongerChains(usize),
}

impl Escalation {
    #[must_use]
    pub const fn scope(self) -> WordScope {
        WordScope::All
    }

    #[must_use]
    pub const fn max_chain_length(self, config: &SolveConfig) -> usize {
        match self {
            Self::AllWords => config.max_chain_length,
            Self::LongerChains(n) => n,
        }
    }
}

impl fmt::Display for Escalation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllWords => write!(f, "search all words"),
            Self::LongerChains(n) => write!(f, "allow chains of {n} words"),
        }
    }
}

/// Escalation steps available after the first attempt, in order
///
/// The all-words step is skipped when the first attempt already saw every
/// candidate, or when there are too many for a full search to be practical.
#[must_use]
pub fn escalation_plan(config: &SolveConfig, candidate_count: usize) -> Vec<Escalation> {
    let mut plan = Vec::with_capacity(2);

    let subset_was_partial = matches!(config.first_scope(), WordScope::Top(n) if n < candidate_count);
    if subset_was_partial && candidate_count < ESCALATION_WORD_LIMIT {
        plan.push(Escalation::AllWords);
    }
    if config.max_chain_length < ESCALATION_MAX_CHAIN {
        plan.push(Escalation::LongerChains(config.max_chain_length + 1));
    }

    plan
}

/// One search invocation within a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub scope: WordScope,
    pub max_chain_length: usize,
    pub words_searched: usize,
    pub explored: usize,
    pub solutions_found: usize,
    pub aborted: bool,
}

/// Result of solving a puzzle
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub puzzle: Puzzle,
    /// Words passing the dictionary filter
    pub playable_count: usize,
    /// Words left after the length floor
    pub candidate_count: usize,
    pub min_word_length: usize,
    pub attempts: Vec<Attempt>,
    /// Ranked chains from the attempt that found them
    pub solutions: Vec<RankedSolution>,
}

impl SolveResult {
    /// Empty result for a prepared puzzle
    #[must_use]
    pub fn new(puzzle: Puzzle, candidates: &Candidates) -> Self {
        Self {
            puzzle,
            playable_count: candidates.playable_count(),
            candidate_count: candidates.words().len(),
            min_word_length: candidates.min_length(),
            attempts: Vec::new(),
            solutions: Vec::new(),
        }
    }

    /// Record a finished search; its chains replace the current solutions if non-empty
    pub fn record(&mut self, scope: WordScope, max_chain_length: usize, report: &SearchReport) {
        self.attempts.push(Attempt {
            scope,
            max_chain_length,
            words_searched: match scope {
                WordScope::Top(n) => n.min(self.candidate_count),
                WordScope::All => self.candidate_count,
            },
            explored: report.explored,
            solutions_found: report.solutions.len(),
            aborted: report.aborted,
        });

        if !report.solutions.is_empty() {
            self.solutions = rank_solutions(&report.chains(), self.puzzle.letters());
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// True if any attempt was cut short by the observer
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.attempts.iter().any(|a| a.aborted)
    }

    /// Chain nodes visited across all attempts
    #[must_use]
    pub fn total_explored(&self) -> usize {
        self.attempts.iter().map(|a| a.explored).sum()
    }

    /// Word-count bound of the last attempt
    #[must_use]
    pub fn final_max_chain_length(&self) -> Option<usize> {
        self.attempts.last().map(|a| a.max_chain_length)
    }
}

/// Run one attempt and record it
pub fn run_attempt<O: SearchObserver>(
    result: &mut SolveResult,
    candidates: &Candidates,
    config: &SolveConfig,
    scope: WordScope,
    max_chain_length: usize,
    observer: &mut O,
) {
    let report = candidates.search(scope, config.search_config(max_chain_length), observer);
    log::info!(
        "Attempt over {} words (max {} per chain) explored {} chains, found {}",
        candidates.scope_size(scope),
        max_chain_length,
        report.explored,
        report.solutions.len()
    );
    result.record(scope, max_chain_length, &report);
}

/// Solve `puzzle`, escalating automatically when `config.escalate` is set
///
/// # Examples
/// ```
/// use letter_boxed::commands::{SolveConfig, solve_puzzle};
/// use letter_boxed::core::{Puzzle, Word};
/// use letter_boxed::solver::{NoopObserver, Solver};
///
/// let dictionary: Vec<Word> = ["LUXE", "EVICTS", "SKY", "YOLK"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let puzzle = Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap();
///
/// let result = solve_puzzle(&SolveConfig::default(), &puzzle, &Solver::new(&dictionary), &mut NoopObserver);
/// assert_eq!(result.solutions[0].words, vec!["LUXE", "EVICTS", "SKY", "YOLK"]);
/// ```
pub fn solve_puzzle<O: SearchObserver>(
    config: &SolveConfig,
    puzzle: &Puzzle,
    solver: &Solver,
    observer: &mut O,
) -> SolveResult {
    let candidates = solver.prepare(puzzle);
    let mut result = SolveResult::new(puzzle.clone(), &candidates);

    if candidates.is_empty() {
        log::warn!("No dictionary words can be played on {puzzle}");
        return result;
    }

    run_attempt(
        &mut result,
        &candidates,
        config,
        config.first_scope(),
        config.max_chain_length,
        observer,
    );

    if !config.escalate {
        return result;
    }

    for step in escalation_plan(config, candidates.words().len()) {
        if result.is_solved() || result.aborted() {
            break;
        }
        log::info!("No solution yet, escalating: {step}");
        run_attempt(
            &mut result,
            &candidates,
            config,
            step.scope(),
            step.max_chain_length(config),
            observer,
        );
    }

    result
}
