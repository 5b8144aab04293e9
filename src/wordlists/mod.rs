//! Word lists for Letter Boxed solving
//!
//! Provides the embedded dictionary compiled into the binary, plus loading of
//! custom line-delimited dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
