//! TUI application state and logic

use crate::commands::{
    ProgressObserver, SolveConfig, SolveResult, default_puzzle, random_example, solve_puzzle,
};
use crate::core::{Puzzle, SIDE_COUNT, Word};
use crate::solver::search::Pruning;
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest chain bound selectable with `+`
pub const MAX_CHAIN_LIMIT: usize = 8;
/// Letters per side when the puzzle is typed without separators
const LETTERS_PER_SIDE: usize = 3;
/// Time budget for one solve before results are shown as they stand
const TUI_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_INPUT_LEN: usize = 40;
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub config: SolveConfig,
    pub input_buffer: String,
    pub puzzle: Option<Puzzle>,
    pub result: Option<SolveResult>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set by Enter; the solve runs after the next draw so "Solving" is visible
    pub pending_solve: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_attempted: usize,
    pub puzzles_solved: usize,
    pub total_explored: usize,
    pub last_duration: Option<Duration>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        let config = SolveConfig {
            escalate: true,
            timeout: Some(TUI_TIMEOUT),
            ..SolveConfig::default()
        };

        Self {
            solver: Solver::new(dictionary),
            config,
            input_buffer: String::new(),
            puzzle: None,
            result: None,
            messages: vec![
                Message {
                    text: format!("Welcome! {} words loaded.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type the 12 letters side by side (e.g. LEIXYSCUVKOT) and press Enter"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            pending_solve: false,
        }
    }

    /// Replace the solve settings, e.g. from command-line flags
    #[must_use]
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the input buffer and queue a solve
    pub fn submit(&mut self) {
        match parse_entry(&self.input_buffer) {
            Ok(puzzle) => {
                self.add_message(&format!("Solving {puzzle}..."), MessageStyle::Info);
                self.puzzle = Some(puzzle);
                self.result = None;
                self.pending_solve = true;
            }
            Err(e) => self.add_message(&e, MessageStyle::Error),
        }
    }

    /// Run the queued solve, if any
    pub fn solve_pending(&mut self) {
        if !self.pending_solve {
            return;
        }
        self.pending_solve = false;
        let Some(puzzle) = self.puzzle.clone() else {
            return;
        };

        let start = Instant::now();
        let mut observer = ProgressObserver::hidden(self.config.timeout);
        let result = solve_puzzle(&self.config, &puzzle, &self.solver, &mut observer);
        let elapsed = start.elapsed();

        self.stats.puzzles_attempted += 1;
        self.stats.total_explored += result.total_explored();
        self.stats.last_duration = Some(elapsed);

        if result.candidate_count == 0 {
            self.add_message("No dictionary words fit this puzzle", MessageStyle::Error);
        } else if result.is_solved() {
            self.stats.puzzles_solved += 1;
            let best = result.solutions[0].word_count();
            self.add_message(
                &format!(
                    "Found {} solution(s) of {best} words in {:.2}s",
                    result.solutions.len(),
                    elapsed.as_secs_f64()
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                "No solutions found. Try a longer chain bound with '+'",
                MessageStyle::Error,
            );
        }
        if observer.timed_out() {
            self.add_message(
                "Time limit reached; results may not be optimal",
                MessageStyle::Error,
            );
        }

        self.result = Some(result);
    }

    /// Fill the input with `puzzle` and queue a solve
    pub fn load_puzzle(&mut self, puzzle: &Puzzle) {
        self.input_buffer = puzzle.sides().join(" ");
        self.submit();
    }

    pub fn load_random_example(&mut self) {
        let puzzle = random_example().unwrap_or_else(default_puzzle);
        self.load_puzzle(&puzzle);
    }

    pub fn clear(&mut self) {
        self.input_buffer.clear();
        self.puzzle = None;
        self.result = None;
        self.add_message("Cleared", MessageStyle::Info);
    }

    pub fn toggle_prefer_simple(&mut self) {
        self.config.prefer_simple = !self.config.prefer_simple;
        let text = if self.config.prefer_simple {
            "Preferring simpler, more common words"
        } else {
            "Minimizing word count and redundancy only"
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn toggle_escalate(&mut self) {
        self.config.escalate = !self.config.escalate;
        let text = if self.config.escalate {
            "Escalation on: wider searches run when nothing is found"
        } else {
            "Escalation off"
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn toggle_pruning(&mut self) {
        self.config.pruning = match self.config.pruning {
            Pruning::Strict => Pruning::KeepTies,
            Pruning::KeepTies => Pruning::Strict,
        };
        let text = match self.config.pruning {
            Pruning::Strict => "Pruning: strict (fastest)",
            Pruning::KeepTies => "Pruning: keep ties (compares every equal-length chain)",
        };
        self.add_message(text, MessageStyle::Info);
    }

    /// Change the chain bound by `delta`, clamped to `1..=MAX_CHAIN_LIMIT`
    pub fn adjust_max_chain(&mut self, delta: isize) {
        let next = self
            .config
            .max_chain_length
            .saturating_add_signed(delta)
            .clamp(1, MAX_CHAIN_LIMIT);
        self.config.max_chain_length = next;
        self.add_message(
            &format!("Maximum chain length: {next} words"),
            MessageStyle::Info,
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.load_random_example(),
            KeyCode::Char('d') if ctrl => self.load_puzzle(&default_puzzle()),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('e') if ctrl => self.toggle_escalate(),
            KeyCode::Char('t') if ctrl => self.toggle_pruning(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_prefer_simple(),
            KeyCode::Char('+' | '=') => self.adjust_max_chain(1),
            KeyCode::Char('-') => self.adjust_max_chain(-1),
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < MAX_INPUT_LEN {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Char(' ' | ',' | '|') => {
                if !self.input_buffer.is_empty() && !self.input_buffer.ends_with(' ') {
                    self.input_buffer.push(' ');
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Read a puzzle from the input line
///
/// Twelve letters without separators are split into sides of three; anything
/// with spaces, commas or bars is read side by side.
///
/// # Errors
///
/// Returns a message describing the problem with the input.
pub fn parse_entry(input: &str) -> Result<Puzzle, String> {
    let trimmed = input.trim();
    if trimmed.contains(|c: char| c.is_whitespace() || c == ',' || c == '|') {
        return trimmed.parse::<Puzzle>().map_err(|e| e.to_string());
    }

    if trimmed.len() != SIDE_COUNT * LETTERS_PER_SIDE {
        return Err(format!(
            "Type {} letters ({LETTERS_PER_SIDE} per side) or {SIDE_COUNT} sides separated by spaces",
            SIDE_COUNT * LETTERS_PER_SIDE
        ));
    }

    let sides: Vec<&str> = (0..SIDE_COUNT)
        .filter_map(|i| trimmed.get(i * LETTERS_PER_SIDE..(i + 1) * LETTERS_PER_SIDE))
        .collect();
    Puzzle::new(&sides).map_err(|e| e.to_string())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.pending_solve {
            app.solve_pending();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
