//! Letter Boxed Solver
//!
//! Finds chains of dictionary words that use every letter of a Letter Boxed
//! puzzle, where consecutive letters of a word never come from the same side
//! and each word starts with the last letter of the one before. Shorter chains
//! win; ties go to the chain that repeats fewer letters.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::commands::{SolveConfig, solve_puzzle};
//! use letter_boxed::core::Puzzle;
//! use letter_boxed::solver::{NoopObserver, Solver};
//! use letter_boxed::wordlists::{WORDS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let puzzle: Puzzle = "LEI XYS CUV KOT".parse().unwrap();
//!
//! let result = solve_puzzle(&SolveConfig::default(), &puzzle, &Solver::new(&dictionary), &mut NoopObserver);
//! for solution in &result.solutions {
//!     println!("{}", solution.words.join(" → "));
//! }
//! ```

// Core domain types
pub mod core;

// Filtering, heuristics, chain search and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
