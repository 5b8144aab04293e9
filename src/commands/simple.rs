//! Simple interactive CLI mode
//!
//! Text-based prompt loop without TUI

use super::examples::default_puzzle;
use super::progress::ProgressObserver;
use super::solve::{SolveConfig, SolveResult, escalation_plan, run_attempt};
use crate::core::{Puzzle, SIDE_COUNT};
use crate::output::{print_examples, print_solve_result, print_top_words};
use crate::solver::{Candidates, Solver, WordScope};
use crate::solver::heuristics::rank_by_unique_letters;
use colored::Colorize;
use std::io::{self, Write};

/// Words shown by the unique-letter listing
const TOP_WORDS_SHOWN: usize = 20;

/// Run the simple interactive CLI mode
///
/// `defaults` seeds every puzzle's settings; the prompts can override
/// simplicity and chain length per puzzle.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver, defaults: SolveConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Letter Boxed Solver - Simple Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the letters on each side of the square, and I'll find chains");
    println!("of words that use every letter with the fewest possible words.");
    println!("{} words were loaded from the dictionary.\n", solver.dictionary().len());
    println!("Tip: each side typically has 3 letters, and all letters must be unique.");
    println!("Commands: 'example' to list puzzles, 'default' for the default puzzle, 'quit' to exit\n");

    loop {
        let Some(puzzle) = read_puzzle()? else {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        };

        solve_interactively(solver, defaults, &puzzle)?;

        if !confirm("\nWould you like to solve another puzzle? (y/n)")? {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        }
    }
}

/// Prompt for four sides until a valid, confirmed puzzle is entered
///
/// `None` means the user asked to quit.
fn read_puzzle() -> Result<Option<Puzzle>, String> {
    'entry: loop {
        println!("\nEnter the letters for each side of the square (one side per line):");
        let mut sides = Vec::with_capacity(SIDE_COUNT);

        for i in 0..SIDE_COUNT {
            let input = get_user_input(&format!("Side {}", i + 1))?;
            match input.to_lowercase().as_str() {
                "quit" | "exit" | "q" => return Ok(None),
                "example" | "examples" => {
                    print_examples();
                    continue 'entry;
                }
                "default" => {
                    sides = default_puzzle().sides().to_vec();
                    break;
                }
                _ => sides.push(input),
            }
        }

        let puzzle = match Puzzle::new(&sides) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                println!("{} {e}", "❌".red());
                continue;
            }
        };

        println!("\nYour puzzle: {}", puzzle.to_string().bright_yellow().bold());
        if confirm("Is this correct? (y/n)")? {
            return Ok(Some(puzzle));
        }
    }
}

/// Solve one puzzle, asking before each escalation step
fn solve_interactively(
    solver: &Solver,
    defaults: SolveConfig,
    puzzle: &Puzzle,
) -> Result<(), String> {
    let candidates = solver.prepare(puzzle);
    println!(
        "\n{} playable words; using {} of length {} or more",
        candidates.playable_count(),
        candidates.words().len(),
        candidates.min_length()
    );

    if candidates.is_empty() {
        println!("\nNo valid words found for this puzzle. Please check your input.");
        return Ok(());
    }

    if confirm("\nShow top words by unique letter count? (y/n)")? {
        print_top_words(&rank_by_unique_letters(candidates.words()), TOP_WORDS_SHOWN);
    }

    let mut config = defaults;
    config.prefer_simple = confirm("\nPrefer simpler, more common words in solutions? (y/n)")?;
    if config.prefer_simple {
        println!("Will prioritize simpler, more common words in solutions.");
    } else {
        println!("Will focus on minimizing word count and letter redundancy only.");
    }

    let custom = get_user_input(&format!(
        "\nLooking for solutions with up to {} words. Change this? (Enter number or press Enter to keep)",
        config.max_chain_length
    ))?;
    if let Ok(n) = custom.parse::<usize>()
        && n > 0
    {
        config.max_chain_length = n;
        println!("Set maximum chain length to {n}");
    }

    let mut result = SolveResult::new(puzzle.clone(), &candidates);
    let scope = config.first_scope();
    println!(
        "\nSearching {} words for chains of up to {} words...",
        candidates.scope_size(scope),
        config.max_chain_length
    );
    search_with_spinner(&mut result, &candidates, &config, scope, config.max_chain_length);

    for step in escalation_plan(&config, candidates.words().len()) {
        if result.is_solved() {
            break;
        }
        if confirm(&format!("No solutions found. Try again and {step}? (y/n)"))? {
            println!("Trying again: {step}...");
            search_with_spinner(
                &mut result,
                &candidates,
                &config,
                step.scope(),
                step.max_chain_length(&config),
            );
        }
    }

    print_solve_result(&result, false);
    Ok(())
}

fn search_with_spinner(
    result: &mut SolveResult,
    candidates: &Candidates,
    config: &SolveConfig,
    scope: WordScope,
    max_chain_length: usize,
) {
    let mut observer = ProgressObserver::new(config.timeout);
    run_attempt(result, candidates, config, scope, max_chain_length, &mut observer);
    observer.finish();
}

/// Ask a yes/no question; anything starting with `y` is yes
fn confirm(prompt: &str) -> Result<bool, String> {
    Ok(get_user_input(prompt)?.to_lowercase().starts_with('y'))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
