//! Display functions for command results

use super::formatters::{format_chain, format_percent, puzzle_box, status_label};
use crate::commands::{EXAMPLE_PUZZLES, SolveResult};
use crate::core::Word;
use crate::solver::{WordScope, group_by_length};
use colored::Colorize;

/// Solutions listed per word-count group
pub const MAX_DISPLAY_PER_GROUP: usize = 10;

/// Print the puzzle square with a heading
pub fn print_puzzle(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle: {}", result.puzzle.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
    for line in puzzle_box(&result.puzzle) {
        println!("   {}", line.bright_white().bold());
    }
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    print_puzzle(result);

    println!(
        "\n{} playable words, {} of length {} or more",
        result.playable_count, result.candidate_count, result.min_word_length
    );

    if verbose {
        for (i, attempt) in result.attempts.iter().enumerate() {
            let scope = match attempt.scope {
                WordScope::Top(_) => "top",
                WordScope::All => "all",
            };
            println!(
                "  Attempt {}: {} {} words, max {} per chain, {} chains explored, {} found{}",
                i + 1,
                scope,
                attempt.words_searched,
                attempt.max_chain_length,
                attempt.explored,
                attempt.solutions_found,
                if attempt.aborted { " (stopped)" } else { "" }
            );
        }
    }

    if result.aborted() {
        println!(
            "{}",
            "⚠ Search stopped early; solutions may not be the shortest possible".yellow()
        );
    }

    if !result.is_solved() {
        print_no_solutions();
        return;
    }

    for (length, group) in group_by_length(&result.solutions) {
        println!(
            "\n{}",
            format!("=== {length}-WORD SOLUTIONS ===").bright_cyan().bold()
        );

        for (i, solution) in group.iter().take(MAX_DISPLAY_PER_GROUP).enumerate() {
            let status = status_label(solution, &result.puzzle);
            let status = if solution.is_complete() {
                status.green().bold()
            } else {
                status.yellow().bold()
            };

            println!(
                "Solution {}: {}",
                i + 1,
                format_chain(&solution.words).bright_white().bold()
            );
            println!("  Status:     {status}");
            println!(
                "  Redundancy: {} extra letter occurrences",
                solution.redundancy
            );
            println!(
                "  Efficiency: {} (higher is better)",
                format_percent(solution.efficiency)
            );
            if !solution.is_complete() {
                println!("  Missing letters: {}", solution.missing.to_string().red());
            }
            if verbose {
                println!("  Score:      {:.1}", solution.score);
            }
            println!();
        }

        let remaining = group.len().saturating_sub(MAX_DISPLAY_PER_GROUP);
        if remaining > 0 {
            println!("... and {remaining} more {length}-word solutions");
        }
    }
}

/// Suggestions after an empty result
pub fn print_no_solutions() {
    println!("\n{}", "No solutions found. Consider:".red().bold());
    println!("1. Increasing the maximum chain length (--max-chain)");
    println!("2. Searching every word (--all-words) or escalating (--escalate)");
    println!("3. Adding more words to your dictionary (--wordlist)");
    println!("4. Checking if your puzzle input is correct");
}

/// Print the built-in puzzles
pub fn print_examples() {
    println!("\n{}", "Example puzzles:".bright_cyan().bold());
    for (i, sides) in EXAMPLE_PUZZLES.iter().enumerate() {
        println!("Example {}: {}", i + 1, sides.join(" | "));
    }
    println!();
}

/// Print words with their distinct-letter counts
pub fn print_top_words(ranked: &[(&Word, usize)], limit: usize) {
    println!(
        "\n{}",
        format!("Top {} words by unique letters:", limit.min(ranked.len()))
            .bright_cyan()
            .bold()
    );
    for (word, unique) in ranked.iter().take(limit) {
        println!("  {:<16} {unique}", word.text());
    }
    println!();
}
