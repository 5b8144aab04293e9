//! Command implementations

pub mod examples;
pub mod progress;
pub mod simple;
pub mod solve;

pub use examples::{DEFAULT_PUZZLE, EXAMPLE_PUZZLES, default_puzzle, example_puzzle, random_example};
pub use progress::ProgressObserver;
pub use simple::run_simple;
pub use solve::{
    Attempt, DEFAULT_SUBSET_SIZE, ESCALATION_MAX_CHAIN, ESCALATION_WORD_LIMIT, Escalation,
    SolveConfig, SolveResult, escalation_plan, run_attempt, solve_puzzle,
};
