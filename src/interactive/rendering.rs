//! TUI rendering with ratatui
//!
//! Board, letter hints, messages, and session statistics.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::core::{LetterBoard, LetterScore, WORD_LEN, classify};
use crate::game::Status;

use super::app::{App, Message, MessageStyle};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board left, hints and stats right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(30)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(main_chunks[1]);

    render_letters(f, app, side_chunks[0]);
    render_stats(f, app, side_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D   S L O T")
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

fn score_style(score: Option<LetterScore>) -> Style {
    match score {
        Some(LetterScore::Match) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterScore::Mismatch) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterScore::Unmatch) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default(),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let target = app.state.target();
    let board = app.state.letter_board();
    let mut lines: Vec<Line> = Vec::new();

    // Submitted guesses, colored against the target
    for guess in app.state.guesses() {
        let mut spans = Vec::new();
        for position in 0..WORD_LEN {
            let score = classify(position, guess.text(), target);
            let cell = format!(" {} ", (guess.char_at(position) as char).to_ascii_uppercase());
            spans.push(Span::styled(cell, score_style(score)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // The in-progress entry row
    if app.state.status() == Status::Guessing {
        let entry = app.state.entry();
        let mut spans = Vec::new();
        for position in 0..WORD_LEN {
            match entry.as_bytes().get(position) {
                Some(&letter) => {
                    // Dim letters already known to be absent
                    let known_absent = board
                        .as_ref()
                        .and_then(|b| b.score_for(letter))
                        == Some(LetterScore::Unmatch);
                    let style = if known_absent {
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    };
                    let cell = format!(" {} ", (letter as char).to_ascii_uppercase());
                    spans.push(Span::styled(cell, style));
                }
                None => {
                    let style = if position == entry.len() {
                        // The cell awaiting the next letter
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    spans.push(Span::styled(" _ ", style));
                }
            }
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let title = match app.state.status() {
        Status::NoWord => " Board (no word yet) ",
        _ => " Board ",
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let board = app.state.letter_board().unwrap_or_else(LetterBoard::default);

    let mut spans = Vec::new();
    for letter in b'a'..=b'z' {
        let shown = ((letter as char).to_ascii_uppercase()).to_string();
        spans.push(Span::styled(shown, score_style(board.score_for(letter))));
        if letter != b'z' {
            spans.push(Span::raw(" "));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Played:   {}", stats.games_finished)),
        Line::from(format!("Won:      {}", stats.games_won)),
        Line::from(format!("Gave up:  {}", stats.games_given_up)),
    ];

    if !stats.win_distribution.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Wins by guess count:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (index, &count) in stats.win_distribution.iter().enumerate() {
            if count > 0 {
                let bar = "█".repeat(count.min(20));
                lines.push(Line::from(format!("{:>2}: {bar} {count}", index + 1)));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn message_style(style: &MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|Message { text, style }| {
            ListItem::new(Line::from(Span::styled(text.clone(), message_style(style))))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = match app.state.status() {
        Status::Guessing => {
            if app.state.can_give_up() {
                "type a word · Enter submit · Backspace erase · Ctrl-G give up · Esc quit"
            } else {
                "type a word · Enter submit · Backspace erase · Esc quit"
            }
        }
        _ if app.fetching => "fetching a word... · q quit",
        _ => "n new word · q quit",
    };

    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}
