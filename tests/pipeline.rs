//! End-to-end solving: dictionary filter, subset, chain search and ranking

use letter_boxed::commands::{SolveConfig, default_puzzle, solve_puzzle};
use letter_boxed::core::{Chain, Puzzle, Word};
use letter_boxed::output::to_json;
use letter_boxed::solver::{NoopObserver, Pruning, Solver};
use letter_boxed::wordlists::{
    WORDS,
    loader::{parse_words, words_from_slice},
};

fn words(list: &[&str]) -> Vec<Word> {
    words_from_slice(list)
}

fn chain_of(texts: &[String]) -> Chain {
    Chain::new(texts.iter().map(|t| Word::new(t).unwrap()).collect())
}

fn assert_valid_solution(puzzle: &Puzzle, texts: &[String]) {
    let chain = chain_of(texts);
    assert!(chain.is_linked(), "{chain} is not linked");
    assert!(!chain.has_repeated_word(), "{chain} repeats a word");
    assert_eq!(chain.letters_used(), puzzle.letters(), "{chain} misses letters");
    for word in chain.words() {
        for pair in word.bytes().windows(2) {
            assert!(
                puzzle.allows_pair(pair[0], pair[1]),
                "{word} uses two letters from one side"
            );
        }
    }
}

#[test]
fn default_puzzle_scenario() {
    let dictionary = words(&["LUXE", "EVICTS", "SKY", "YOLK", "LEAK"]);
    let puzzle = default_puzzle();
    let solver = Solver::new(&dictionary);

    let candidates = solver.prepare(&puzzle);
    let playable: Vec<&str> = candidates.words().iter().map(Word::text).collect();
    assert_eq!(playable, vec!["LUXE", "EVICTS", "SKY", "YOLK"]);

    let result = solve_puzzle(&SolveConfig::default(), &puzzle, &solver, &mut NoopObserver);
    assert_eq!(result.solutions.len(), 1);

    let best = &result.solutions[0];
    assert_eq!(best.words, vec!["LUXE", "EVICTS", "SKY", "YOLK"]);
    assert!(best.is_complete());
    assert_eq!(best.redundancy, 5);
    assert_valid_solution(&puzzle, &best.words);
}

#[test]
fn default_puzzle_needs_four_words_with_that_dictionary() {
    let dictionary = words(&["LUXE", "EVICTS", "SKY", "YOLK"]);
    let config = SolveConfig {
        max_chain_length: 3,
        ..SolveConfig::default()
    };
    let result = solve_puzzle(
        &config,
        &default_puzzle(),
        &Solver::new(&dictionary),
        &mut NoopObserver,
    );

    assert!(result.solutions.is_empty());
}

#[test]
fn single_word_bound() {
    let puzzle = Puzzle::new(&["AB", "CD", "EF", "GH"]).unwrap();
    let config = SolveConfig {
        max_chain_length: 1,
        ..SolveConfig::default()
    };

    let covering = words(&["ACEGBDFH", "ACE", "EGBDFH"]);
    let result = solve_puzzle(&config, &puzzle, &Solver::new(&covering), &mut NoopObserver);
    assert_eq!(result.solutions.len(), 1);
    assert_eq!(result.solutions[0].words, vec!["ACEGBDFH"]);

    let partial = words(&["ACE", "EGBDFH"]);
    let result = solve_puzzle(&config, &puzzle, &Solver::new(&partial), &mut NoopObserver);
    assert!(result.solutions.is_empty());
}

#[test]
fn unusable_dictionary_yields_nothing() {
    let dictionary = words(&["LEAK", "TOTE", "ALLEY"]);
    let result = solve_puzzle(
        &SolveConfig::default(),
        &default_puzzle(),
        &Solver::new(&dictionary),
        &mut NoopObserver,
    );

    assert_eq!(result.candidate_count, 0);
    assert!(result.attempts.is_empty());
    assert!(result.solutions.is_empty());
}

#[test]
fn repeated_dictionary_entry_is_never_used_twice() {
    let dictionary = parse_words("EA\nAB\nab\nBCA\nBDF\n");
    let puzzle = Puzzle::new(&["AD", "BE", "C", "F"]).unwrap();
    let config = SolveConfig {
        max_chain_length: 5,
        subset_size: None,
        ..SolveConfig::default()
    };
    let result = solve_puzzle(&config, &puzzle, &Solver::new(&dictionary), &mut NoopObserver);

    for solution in &result.solutions {
        assert_valid_solution(&puzzle, &solution.words);
    }
    assert!(result.solutions.is_empty());
}

#[test]
fn embedded_dictionary_solves_default_puzzle() {
    let dictionary = words_from_slice(WORDS);
    let solver = Solver::new(&dictionary);
    let puzzle = default_puzzle();

    let config = SolveConfig {
        subset_size: None,
        ..SolveConfig::default()
    };
    let result = solve_puzzle(&config, &puzzle, &solver, &mut NoopObserver);

    assert!(result.is_solved());
    let length = result.solutions[0].word_count();
    assert!(length <= 4);
    for solution in &result.solutions {
        assert_eq!(solution.word_count(), length);
        assert_valid_solution(&puzzle, &solution.words);
    }
}

#[test]
fn results_are_deterministic() {
    let dictionary = words_from_slice(WORDS);
    let solver = Solver::new(&dictionary);
    let puzzle = default_puzzle();

    for pruning in [Pruning::Strict, Pruning::KeepTies] {
        let config = SolveConfig {
            pruning,
            subset_size: None,
            ..SolveConfig::default()
        };
        let first = solve_puzzle(&config, &puzzle, &solver, &mut NoopObserver);
        let second = solve_puzzle(&config, &puzzle, &solver, &mut NoopObserver);
        assert_eq!(first.solutions, second.solutions);
    }
}

#[test]
fn keep_ties_never_returns_longer_chains_than_strict() {
    let dictionary = words_from_slice(WORDS);
    let solver = Solver::new(&dictionary);
    let puzzle = default_puzzle();

    let strict_config = SolveConfig {
        subset_size: None,
        ..SolveConfig::default()
    };
    let strict = solve_puzzle(&strict_config, &puzzle, &solver, &mut NoopObserver);
    let ties = solve_puzzle(
        &SolveConfig {
            pruning: Pruning::KeepTies,
            ..strict_config
        },
        &puzzle,
        &solver,
        &mut NoopObserver,
    );

    assert_eq!(
        strict.solutions[0].word_count(),
        ties.solutions[0].word_count()
    );
    assert!(ties.solutions[0].redundancy <= strict.solutions[0].redundancy);
}

#[test]
fn json_output_lists_solutions() {
    let dictionary = words(&["LUXE", "EVICTS", "SKY", "YOLK"]);
    let result = solve_puzzle(
        &SolveConfig::default(),
        &default_puzzle(),
        &Solver::new(&dictionary),
        &mut NoopObserver,
    );

    let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(
        value["solutions"][0]["words"],
        serde_json::json!(["LUXE", "EVICTS", "SKY", "YOLK"])
    );
}
