//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are pure, testable, and immutable once constructed.

mod chain;
mod letters;
mod puzzle;
mod word;

pub use chain::Chain;
pub use letters::LetterSet;
pub use puzzle::{Puzzle, PuzzleError, SIDE_COUNT};
pub use word::{Word, WordError};
