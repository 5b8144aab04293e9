//! Letter Boxed solving
//!
//! Dictionary filtering, branch-ordering heuristics, the chain search itself
//! and ranking of the chains it returns.

mod engine;
pub mod filter;
pub mod heuristics;
pub mod ranking;
pub mod search;

pub use engine::{Candidates, Solver, WordScope};
pub use ranking::{RankedSolution, group_by_length, rank_solutions};
pub use search::{
    ChainSearch, Improvement, NoopObserver, Pruning, SearchConfig, SearchObserver, SearchReport,
};
