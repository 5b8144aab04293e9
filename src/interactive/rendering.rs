//! TUI rendering with ratatui
//!
//! Puzzle square, solutions, settings and messages for the Letter Boxed
//! solver interface.

use super::app::{App, MessageStyle, parse_entry};
use crate::output::formatters::{format_chain, format_percent, puzzle_box};
use crate::solver::group_by_length;
use crate::solver::search::Pruning;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("✉ LETTER BOXED SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Puzzle square
            Constraint::Min(5),    // Solutions
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_solutions(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    // The solved puzzle, or a live preview of what is being typed
    let puzzle = app
        .puzzle
        .clone()
        .or_else(|| parse_entry(&app.input_buffer).ok());

    let content: Vec<Line> = match puzzle {
        Some(puzzle) => puzzle_box(&puzzle)
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect(),
        None => vec![
            Line::from("No puzzle yet"),
            Line::from(""),
            Line::from("Type 12 letters, or press Ctrl-R for an example"),
        ],
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    match &app.result {
        None if app.pending_solve => lines.push(Line::from("Solving...")),
        None => lines.push(Line::from("Press Enter to solve")),
        Some(result) if !result.is_solved() => {
            lines.push(Line::from(Span::styled(
                "No solutions found",
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(format!(
                "{} playable words, {} chains explored",
                result.playable_count,
                result.total_explored()
            )));
        }
        Some(result) => {
            for (length, group) in group_by_length(&result.solutions) {
                lines.push(Line::from(Span::styled(
                    format!("{length}-word solutions ({})", group.len()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                for solution in &group {
                    let color = if solution.is_complete() {
                        Color::Green
                    } else {
                        Color::Yellow
                    };
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(
                            format_chain(&solution.words),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!(
                                "  r{} {}",
                                solution.redundancy,
                                format_percent(solution.efficiency)
                            ),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]));
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Solutions ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Settings
            Constraint::Length(3), // Efficiency gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_settings(f, app, chunks[0]);
    render_efficiency(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let pruning = match app.config.pruning {
        Pruning::Strict => "strict",
        Pruning::KeepTies => "keep ties",
    };

    let content = vec![
        Line::from(format!(
            "Max chain:     {} words  (+/-)",
            app.config.max_chain_length
        )),
        Line::from(format!(
            "Prefer simple: {}  (Tab)",
            on_off(app.config.prefer_simple)
        )),
        Line::from(format!("Escalate:      {}  (^E)", on_off(app.config.escalate))),
        Line::from(format!("Pruning:       {pruning}  (^T)")),
        Line::from(match app.config.subset_size {
            Some(n) => format!("Subset:        top {n} words"),
            None => "Subset:        all words".to_string(),
        }),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_efficiency(f: &mut Frame, app: &App, area: Rect) {
    let best = app.result.as_ref().and_then(|r| r.solutions.first());
    let (percent, label) = best.map_or((0, "No solution".to_string()), |s| {
        (
            (s.efficiency * 100.0).round().min(100.0) as u16,
            format!(
                "Efficiency {} | redundancy {}",
                format_percent(s.efficiency),
                s.redundancy
            ),
        )
    });

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Best Solution ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.pending_solve {
        (" Solving... ", Color::Cyan)
    } else {
        (
            " Enter Puzzle (12 letters or 4 sides) | Enter to solve ",
            Color::Yellow,
        )
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode_text = if app.pending_solve {
        "Solving..."
    } else {
        "Ready"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Solved: {}/{}",
        app.stats.puzzles_solved, app.stats.puzzles_attempted
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let timing_text = app.stats.last_duration.map_or_else(
        || format!("Words: {}", app.solver.dictionary().len()),
        |d| format!("Last: {:.2}s", d.as_secs_f64()),
    );
    let timing = Paragraph::new(timing_text).alignment(Alignment::Center);
    f.render_widget(timing, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^R: Random | ^D: Default | ^L: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
