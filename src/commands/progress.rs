//! Terminal progress for long searches
//!
//! A spinner fed by the search's progress callbacks, which also enforces the
//! optional wall-clock budget.

use crate::core::Chain;
use crate::solver::{Improvement, SearchObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Spinner plus optional deadline
pub struct ProgressObserver {
    bar: ProgressBar,
    deadline: Option<Instant>,
    solutions: usize,
    timed_out: bool,
}

impl ProgressObserver {
    /// Visible spinner on stderr
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {elapsed_precise} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Searching...");
        Self::with_bar(bar, timeout)
    }

    /// No terminal output, deadline still enforced
    #[must_use]
    pub fn hidden(timeout: Option<Duration>) -> Self {
        Self::with_bar(ProgressBar::hidden(), timeout)
    }

    fn with_bar(bar: ProgressBar, timeout: Option<Duration>) -> Self {
        Self {
            bar,
            deadline: timeout.map(|t| Instant::now() + t),
            solutions: 0,
            timed_out: false,
        }
    }

    /// True once the deadline stopped a search
    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for ProgressObserver {
    fn on_solution(&mut self, chain: &Chain, improvement: Improvement) {
        if improvement != Improvement::Equivalent {
            self.solutions = 0;
        }
        self.solutions += 1;
        self.bar.set_message(format!(
            "{} best so far, latest: {chain}",
            self.solutions
        ));
    }

    fn on_progress(&mut self, explored: usize) -> ControlFlow<()> {
        self.bar.tick();
        if self.solutions == 0 {
            self.bar.set_message(format!("{explored} chains explored"));
        }

        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                log::warn!("Search stopped after {explored} chains: time limit reached");
                self.timed_out = true;
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    }
}
