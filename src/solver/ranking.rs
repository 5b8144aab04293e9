//! Solution ranking and annotation
//!
//! Turns raw chains into displayable records. The display score here is
//! "higher is better" and deliberately differs from the search's own
//! tie-break ordering.

use super::heuristics::letter_complexity;
use crate::core::{Chain, LetterSet};
use std::collections::BTreeMap;

/// A chain annotated for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSolution {
    pub words: Vec<String>,
    pub redundancy: usize,
    /// Letter occurrences including repeats
    pub total_letters: usize,
    /// Distinct letters used / total letter occurrences
    pub efficiency: f64,
    /// Puzzle letters the chain does not use (empty for a complete solution)
    pub missing: LetterSet,
    /// Summed length and letter cost of the words, without the run penalty
    pub complexity: f64,
    /// `words × 100 − redundancy × 10 − complexity`
    pub score: f64,
}

impl RankedSolution {
    /// Annotate one chain against the puzzle's letters
    #[must_use]
    pub fn from_chain(chain: &Chain, all_letters: LetterSet) -> Self {
        let redundancy = chain.redundancy();
        let total_letters = chain.total_letters();
        let used = chain.letters_used();
        let efficiency = if total_letters == 0 {
            0.0
        } else {
            used.len() as f64 / total_letters as f64
        };
        let complexity: f64 = chain.words().iter().map(letter_complexity).sum();
        let score = chain.len() as f64 * 100.0 - redundancy as f64 * 10.0 - complexity;

        Self {
            words: chain.words().iter().map(|w| w.text().to_string()).collect(),
            redundancy,
            total_letters,
            efficiency,
            missing: all_letters.difference(used),
            complexity,
            score,
        }
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Annotate every chain, keeping input order
#[must_use]
pub fn rank_solutions(chains: &[Chain], all_letters: LetterSet) -> Vec<RankedSolution> {
    chains
        .iter()
        .map(|chain| RankedSolution::from_chain(chain, all_letters))
        .collect()
}

/// Group by word count (ascending), each group sorted by redundancy ascending
#[must_use]
pub fn group_by_length(solutions: &[RankedSolution]) -> BTreeMap<usize, Vec<RankedSolution>> {
    let mut groups: BTreeMap<usize, Vec<RankedSolution>> = BTreeMap::new();
    for solution in solutions {
        groups
            .entry(solution.word_count())
            .or_default()
            .push(solution.clone());
    }
    for group in groups.values_mut() {
        group.sort_by_key(|s| s.redundancy);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn chain(words: &[&str]) -> Chain {
        Chain::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    const PUZZLE_LETTERS: LetterSet = LetterSet::from_ascii(b"LEIXYSCUVKOT");

    #[test]
    fn complete_solution_annotation() {
        let c = chain(&["LUXE", "EVICTS", "SKY", "YOLK"]);
        let ranked = RankedSolution::from_chain(&c, PUZZLE_LETTERS);

        assert_eq!(ranked.words, vec!["LUXE", "EVICTS", "SKY", "YOLK"]);
        assert_eq!(ranked.redundancy, 5);
        assert_eq!(ranked.total_letters, 17);
        assert!((ranked.efficiency - 12.0 / 17.0).abs() < 1e-9);
        assert!(ranked.is_complete());
        assert_eq!(ranked.word_count(), 4);
    }

    #[test]
    fn display_score_formula() {
        let c = chain(&["LOCK", "KITE"]);
        let ranked = RankedSolution::from_chain(&c, PUZZLE_LETTERS);

        // LOCK: 2.0 + K(2) = 4.0; KITE: 2.0 + K(2) = 4.0
        assert!((ranked.complexity - 8.0).abs() < 1e-9);
        assert!((ranked.score - (200.0 - 10.0 - 8.0)).abs() < 1e-9);
    }

    #[test]
    fn display_score_leaves_out_letter_runs() {
        let c = chain(&["LUXE", "EVICTS", "SKY", "YOLK"]);
        let ranked = RankedSolution::from_chain(&c, PUZZLE_LETTERS);

        // LUXE 4.0, EVICTS 5.0, SKY 5.5 (its SKY run is not charged), YOLK 6.0
        assert!((ranked.complexity - 20.5).abs() < 1e-9);
        assert!((ranked.score - 329.5).abs() < 1e-9);
    }

    #[test]
    fn partial_chain_reports_missing_letters() {
        let c = chain(&["LOCK", "KITE"]);
        let ranked = RankedSolution::from_chain(&c, PUZZLE_LETTERS);

        assert!(!ranked.is_complete());
        assert_eq!(ranked.missing.to_string(), "SUVXY");
    }

    #[test]
    fn empty_chain_has_zero_efficiency() {
        let ranked = RankedSolution::from_chain(&chain(&[]), PUZZLE_LETTERS);
        assert!(ranked.efficiency.abs() < f64::EPSILON);
        assert_eq!(ranked.missing, PUZZLE_LETTERS);
    }

    #[test]
    fn grouping_sorts_by_length_then_redundancy() {
        let chains = vec![
            chain(&["LUXE", "EVICTS", "SKY", "YOLK"]),
            chain(&["LOCK", "KITE"]),
            chain(&["KITE", "EXIT"]),
        ];
        let ranked = rank_solutions(&chains, PUZZLE_LETTERS);
        let groups = group_by_length(&ranked);

        let lengths: Vec<usize> = groups.keys().copied().collect();
        assert_eq!(lengths, vec![2, 4]);

        let two_word = &groups[&2];
        // KITE → EXIT repeats E, I, T (3); LOCK → KITE repeats K (1)
        assert_eq!(two_word[0].words, vec!["LOCK", "KITE"]);
        assert_eq!(two_word[1].redundancy, 3);
    }
}
