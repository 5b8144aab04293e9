//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and JSON.

pub mod display;
pub mod formatters;
pub mod json;

pub use display::{print_examples, print_no_solutions, print_solve_result, print_top_words};
pub use json::{SolveResponse, to_json};
