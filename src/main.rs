//! Letter Boxed Solver - CLI
//!
//! Finds the shortest chains of words that use every letter of a Letter Boxed
//! puzzle, with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use letter_boxed::{
    commands::{
        DEFAULT_SUBSET_SIZE, ProgressObserver, SolveConfig, default_puzzle, example_puzzle,
        run_simple, solve_puzzle,
    },
    core::{Puzzle, Word},
    output::{SolveResponse, print_examples, print_solve_result, to_json},
    solver::{Pruning, Solver, search::DEFAULT_MAX_CHAIN_LENGTH},
    wordlists::{WORDS, loader::words_from_slice},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver: shortest word chains that use every letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Simple CLI mode (prompt loop without TUI)
    Simple {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Solve a puzzle given as four sides, e.g. `solve LEI XYS CUV KOT`
    Solve {
        /// Puzzle sides; defaults to the built-in puzzle
        sides: Vec<String>,

        /// Solve a built-in example instead (see `examples`)
        #[arg(short, long, conflicts_with = "sides")]
        example: Option<usize>,

        #[command(flatten)]
        search: SearchArgs,

        /// Try wider searches when nothing is found
        #[arg(long)]
        escalate: bool,

        /// Stop searching after this many seconds and report what was found
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List the built-in example puzzles
    Examples,
}

/// Search settings shared by every solving mode
#[derive(Args, Clone, Copy)]
struct SearchArgs {
    /// Maximum number of words per chain
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_CHAIN_LENGTH)]
    max_chain: usize,

    /// Ignore word simplicity; minimize word count and redundancy only
    #[arg(long)]
    technical: bool,

    /// Words in the first, fast search
    #[arg(long, default_value_t = DEFAULT_SUBSET_SIZE)]
    subset: usize,

    /// Search every playable word from the start
    #[arg(long, conflicts_with = "subset")]
    all_words: bool,

    /// Compare every chain of the best length instead of pruning early
    #[arg(long)]
    exhaustive_ties: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            max_chain: DEFAULT_MAX_CHAIN_LENGTH,
            technical: false,
            subset: DEFAULT_SUBSET_SIZE,
            all_words: false,
            exhaustive_ties: false,
        }
    }
}

impl SearchArgs {
    fn to_config(self) -> Result<SolveConfig> {
        if self.max_chain == 0 {
            bail!("--max-chain must be at least 1");
        }

        Ok(SolveConfig {
            max_chain_length: self.max_chain,
            prefer_simple: !self.technical,
            subset_size: (!self.all_words).then_some(self.subset),
            pruning: if self.exhaustive_ties {
                Pruning::KeepTies
            } else {
                Pruning::Strict
            },
            ..SolveConfig::default()
        })
    }
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    use letter_boxed::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("Dictionary file '{path}' not found or unreadable")),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        search: SearchArgs::default(),
    });

    if matches!(command, Commands::Examples) {
        print_examples();
        return Ok(());
    }

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::info!("{} words were loaded from the dictionary", dictionary.len());

    match command {
        Commands::Play { search } => run_play_command(&dictionary, search.to_config()?),
        Commands::Simple { search } => run_simple_command(&dictionary, search.to_config()?),
        Commands::Solve {
            sides,
            example,
            search,
            escalate,
            timeout,
            json,
        } => {
            let config = SolveConfig {
                escalate,
                timeout: timeout.map(Duration::from_secs),
                ..search.to_config()?
            };
            run_solve_command(&dictionary, &sides, example, config, json, cli.verbose > 0)
        }
        Commands::Examples => Ok(()),
    }
}

fn parse_puzzle(sides: &[String], example: Option<usize>) -> Result<Puzzle> {
    if let Some(number) = example {
        return example_puzzle(number)
            .with_context(|| format!("No example puzzle {number}; run `examples` to list them"));
    }
    if sides.is_empty() {
        return Ok(default_puzzle());
    }
    Ok(sides.join(" ").parse::<Puzzle>()?)
}

fn run_solve_command(
    dictionary: &[Word],
    sides: &[String],
    example: Option<usize>,
    config: SolveConfig,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let puzzle = match parse_puzzle(sides, example) {
        Ok(puzzle) => puzzle,
        Err(e) if json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&SolveResponse::failure(e.to_string()))?
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let solver = Solver::new(dictionary);
    let mut observer = if json {
        ProgressObserver::hidden(config.timeout)
    } else {
        ProgressObserver::new(config.timeout)
    };
    let result = solve_puzzle(&config, &puzzle, &solver, &mut observer);
    observer.finish();

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print_solve_result(&result, verbose);
    }
    Ok(())
}

fn run_simple_command(dictionary: &[Word], config: SolveConfig) -> Result<()> {
    let solver = Solver::new(dictionary);
    run_simple(&solver, config).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(dictionary: &[Word], config: SolveConfig) -> Result<()> {
    use letter_boxed::interactive::{App, run_tui};

    let app = App::new(dictionary).with_config(SolveConfig {
        escalate: true,
        timeout: Some(Duration::from_secs(30)),
        ..config
    });
    run_tui(app)
}
