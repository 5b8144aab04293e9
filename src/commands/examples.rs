//! Built-in puzzles
//!
//! Past Letter Boxed puzzles used for the default puzzle, the `examples`
//! listing and the TUI's random puzzle key.

use crate::core::Puzzle;
use rand::prelude::IndexedRandom;

/// Previously published puzzles
pub const EXAMPLE_PUZZLES: [[&str; 4]; 5] = [
    ["WNT", "LVE", "KYO", "ARH"],
    ["INH", "GLC", "MKE", "ATO"],
    ["PRO", "CTI", "SAH", "DGN"],
    ["TLQ", "SRU", "BFI", "EMO"],
    ["LEI", "XYS", "CUV", "KOT"],
];

/// Puzzle used when none is given
pub const DEFAULT_PUZZLE: [&str; 4] = ["LEI", "XYS", "CUV", "KOT"];

/// The default puzzle, validated
///
/// # Panics
/// Will not panic - the built-in puzzle is covered by tests.
#[must_use]
pub fn default_puzzle() -> Puzzle {
    Puzzle::new(&DEFAULT_PUZZLE).expect("built-in puzzle is valid")
}

/// Example puzzle by 1-based number, as shown by the `examples` listing
#[must_use]
pub fn example_puzzle(number: usize) -> Option<Puzzle> {
    let sides = EXAMPLE_PUZZLES.get(number.checked_sub(1)?)?;
    Puzzle::new(sides).ok()
}

/// A random example puzzle
#[must_use]
pub fn random_example() -> Option<Puzzle> {
    let sides = EXAMPLE_PUZZLES.choose(&mut rand::rng())?;
    Puzzle::new(sides).ok()
}
