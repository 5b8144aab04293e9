//! The chain search against exhaustive enumeration on small random dictionaries

use letter_boxed::core::{Chain, LetterSet, Puzzle, Word};
use letter_boxed::solver::{NoopObserver, Pruning, SearchConfig, Solver, WordScope};
use proptest::prelude::*;
use std::collections::BTreeSet;

const SIDES: [&str; 4] = ["ABC", "DEF", "GHI", "JKL"];
const MAX_CHAIN: usize = 4;

/// Every linked chain of exactly `length` distinct words covering `letters`
fn covering_chains(words: &[Word], letters: LetterSet, length: usize) -> Vec<Vec<usize>> {
    fn extend(
        words: &[Word],
        letters: LetterSet,
        length: usize,
        path: &mut Vec<usize>,
        used: LetterSet,
        out: &mut Vec<Vec<usize>>,
    ) {
        if path.len() == length {
            if used == letters {
                out.push(path.clone());
            }
            return;
        }
        for (i, word) in words.iter().enumerate() {
            if path.contains(&i) {
                continue;
            }
            if let Some(&last) = path.last()
                && words[last].last_letter() != word.first_letter()
            {
                continue;
            }
            path.push(i);
            extend(words, letters, length, path, used.union(word.letters()), out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    extend(words, letters, length, &mut Vec::new(), LetterSet::EMPTY, &mut out);
    out
}

/// Shortest covering length within `MAX_CHAIN`, with every chain of that length
fn brute_force(words: &[Word], letters: LetterSet) -> Option<(usize, Vec<Chain>)> {
    (1..=MAX_CHAIN).find_map(|length| {
        let found = covering_chains(words, letters, length);
        (!found.is_empty()).then(|| {
            let chains = found
                .into_iter()
                .map(|path| Chain::new(path.iter().map(|&i| words[i].clone()).collect()))
                .collect();
            (length, chains)
        })
    })
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<Word>> {
    let letter = prop::sample::select(b"ABCDEFGHIJKL".to_vec());
    let word = prop::collection::vec(letter, 2..=8)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap_or_default());
    prop::collection::btree_set(word, 1..60).prop_map(|set| {
        set.into_iter()
            .filter_map(|text| Word::new(text).ok())
            .collect()
    })
}

proptest! {
    #[test]
    fn strict_search_finds_the_shortest_length(dictionary in dictionary_strategy()) {
        let puzzle = Puzzle::new(&SIDES).unwrap();
        let candidates = Solver::new(&dictionary).prepare(&puzzle);
        let report = candidates.search(
            WordScope::All,
            SearchConfig::new(MAX_CHAIN, false),
            &mut NoopObserver,
        );

        match brute_force(candidates.words(), puzzle.letters()) {
            None => prop_assert!(report.solutions.is_empty()),
            Some((length, _)) => {
                prop_assert!(!report.solutions.is_empty());
                for solution in &report.solutions {
                    prop_assert_eq!(solution.chain.len(), length);
                    prop_assert!(solution.chain.is_linked());
                    prop_assert_eq!(solution.chain.letters_used(), puzzle.letters());
                }
            }
        }
    }

    #[test]
    fn keep_ties_returns_every_least_redundant_shortest_chain(dictionary in dictionary_strategy()) {
        let puzzle = Puzzle::new(&SIDES).unwrap();
        let candidates = Solver::new(&dictionary).prepare(&puzzle);
        let report = candidates.search(
            WordScope::All,
            SearchConfig::new(MAX_CHAIN, false).with_pruning(Pruning::KeepTies),
            &mut NoopObserver,
        );

        let found: BTreeSet<String> = report
            .solutions
            .iter()
            .map(|s| s.chain.to_string())
            .collect();
        prop_assert_eq!(found.len(), report.solutions.len());

        let expected: BTreeSet<String> = match brute_force(candidates.words(), puzzle.letters()) {
            None => BTreeSet::new(),
            Some((_, chains)) => {
                let least = chains.iter().map(Chain::redundancy).min().unwrap_or(0);
                chains
                    .iter()
                    .filter(|c| c.redundancy() == least)
                    .map(ToString::to_string)
                    .collect()
            }
        };
        prop_assert_eq!(found, expected);
    }
}
