//! Formatting utilities for terminal output

use crate::core::Puzzle;
use crate::solver::RankedSolution;

/// Separator between chained words
pub const CHAIN_ARROW: &str = " → ";

/// Join chain words with arrows
#[must_use]
pub fn format_chain<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(CHAIN_ARROW)
}

/// Format a ratio in `[0, 1]` as a percentage with one decimal
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// `COMPLETE` or `PARTIAL (used/total letters)`
#[must_use]
pub fn status_label(solution: &RankedSolution, puzzle: &Puzzle) -> String {
    if solution.is_complete() {
        "COMPLETE".to_string()
    } else {
        let total = puzzle.letters().len();
        let used = total - solution.missing.len();
        format!("PARTIAL ({used}/{total} letters)")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Draw the puzzle as a square: sides run top, right, bottom, left
///
/// ```text
///    L  E  I
/// K           X
/// O           Y
/// T           S
///    C  U  V
/// ```
#[must_use]
pub fn puzzle_box(puzzle: &Puzzle) -> Vec<String> {
    let side = |i: usize| -> Vec<char> {
        puzzle
            .sides()
            .get(i)
            .map(|s| s.chars().collect())
            .unwrap_or_default()
    };
    let spaced = |letters: &[char]| -> String {
        letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    };

    let (top, right, bottom, left) = (side(0), side(1), side(2), side(3));
    let top_line = spaced(&top);
    let bottom_line = spaced(&bottom);
    let inner = top_line.len().max(bottom_line.len()) + 2;
    let rows = right.len().max(left.len());

    let mut lines = Vec::with_capacity(rows + 2);
    lines.push(format!("  {top_line:^inner$}").trim_end().to_string());
    for row in 0..rows {
        let l = left.get(row).copied().unwrap_or(' ');
        let r = right.get(row).copied().unwrap_or(' ');
        lines.push(format!("{l} {:inner$} {r}", "").trim_end().to_string());
    }
    lines.push(format!("  {bottom_line:^inner$}").trim_end().to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chain, Word};

    fn puzzle() -> Puzzle {
        Puzzle::new(&["LEI", "XYS", "CUV", "KOT"]).unwrap()
    }

    fn ranked(words: &[&str]) -> RankedSolution {
        let chain = Chain::new(words.iter().map(|w| Word::new(*w).unwrap()).collect());
        RankedSolution::from_chain(&chain, puzzle().letters())
    }

    #[test]
    fn chain_formatting() {
        assert_eq!(format_chain(&["LUXE", "EVICTS"]), "LUXE → EVICTS");
        assert_eq!(format_chain(&["SKY"]), "SKY");
        assert_eq!(format_chain::<&str>(&[]), "");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(12.0 / 17.0), "70.6%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn status_labels() {
        let p = puzzle();
        assert_eq!(
            status_label(&ranked(&["LUXE", "EVICTS", "SKY", "YOLK"]), &p),
            "COMPLETE"
        );
        assert_eq!(
            status_label(&ranked(&["LOCK", "KITE"]), &p),
            "PARTIAL (7/12 letters)"
        );
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(100.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn box_layout() {
        let lines = puzzle_box(&puzzle());
        assert_eq!(
            lines,
            vec![
                "   L  E  I",
                "K           X",
                "O           Y",
                "T           S",
                "   C  U  V",
            ]
        );
    }
}
