//! TUI rendering with ratatui
//!
//! Tiles, on-screen keyboard, hint boxes and the guessed-Pokemon sidebar.

use crate::core::{KeyFeedback, LetterFeedback, KEYBOARD_ROWS};
use crate::game::{GamePhase, GameSnapshot, GuessRecord, NoticeStyle, MAX_ATTEMPTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, snapshot: &GameSnapshot) {
    if snapshot.phase == GamePhase::Loading {
        render_loading(f, snapshot);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30), // Sidebar
            Constraint::Min(40),    // Game board
        ])
        .split(f.area());

    render_sidebar(f, snapshot, chunks[0]);

    let board = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Message
            Constraint::Length(4), // Hints / game-over panel
            Constraint::Length(3), // Input
            Constraint::Min(8),    // Guess grid
            Constraint::Length(5), // Keyboard
        ])
        .split(chunks[1]);

    render_header(f, board[0]);
    render_notice(f, snapshot, board[1]);
    if snapshot.is_terminal() {
        render_game_over(f, snapshot, board[2]);
    } else {
        render_hints(f, snapshot, board[2]);
    }
    render_input(f, snapshot, board[3]);
    render_grid(f, snapshot, board[4]);
    render_keyboard(f, snapshot, board[5]);
}

fn render_loading(f: &mut Frame, snapshot: &GameSnapshot) {
    let mut lines = vec![Line::from("Loading Pokémon...")];
    if let Some((text, _)) = &snapshot.notice {
        lines.push(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from("Press 'r' to retry, Esc to quit"));
    }
    let loading = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" POKEDLE "),
    );
    f.render_widget(loading, centered(f.area(), 40, 5));
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("POKEDLE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let (text, style) = match &snapshot.notice {
        Some((text, NoticeStyle::Success)) => (text.clone(), Style::default().fg(Color::Green)),
        Some((text, NoticeStyle::Error)) => (text.clone(), Style::default().fg(Color::Red)),
        Some((text, NoticeStyle::Info)) => (text.clone(), Style::default().fg(Color::Cyan)),
        None => (String::new(), Style::default()),
    };

    let notice = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}

fn render_hints(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let lines = match &snapshot.hints {
        Some(hints) => vec![
            Line::from(format!("TYPE: {}", hints.types.join(" / "))),
            Line::from(format!("GENERATION: {}", hints.generation)),
            Line::from(format!("NAME LENGTH: {} letters", hints.name_length)),
        ],
        None => vec![Line::from(Span::styled(
            "Hints unlock after your first guess",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let hints = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Hints "),
    );
    f.render_widget(hints, area);
}

fn render_game_over(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let mut lines = Vec::new();
    if let Some((name, entry)) = &snapshot.answer {
        lines.push(Line::from(Span::styled(
            name.text().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "{} | {}",
            entry.types.join(" / "),
            entry.generation
        )));
    }
    lines.push(Line::from("Press 'n' for new game, 'q' to quit"));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Game Over "),
    );
    f.render_widget(panel, area);
}

fn render_input(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let input = Paragraph::new(snapshot.input.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enter Pokemon name "),
    );
    f.render_widget(input, area);
}

fn render_grid(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let width = snapshot.secret_length.unwrap_or(0);
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for record in &snapshot.guesses {
        lines.push(scored_row(record, width));
    }
    if let Some(record) = &snapshot.revealing {
        lines.push(scored_row(record, width));
    }
    if !snapshot.input.is_empty() && !snapshot.is_terminal() {
        lines.push(pending_row(&snapshot.input, width));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " Guesses {}/{} ",
                snapshot.guesses.len() + usize::from(snapshot.revealing.is_some()),
                MAX_ATTEMPTS
            )),
    );
    f.render_widget(grid, area);
}

/// Row of colored tiles, padded or truncated to the secret's length.
fn scored_row(record: &GuessRecord, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(width);
    for i in 0..width {
        match record.name.char_at(i) {
            Some(letter) => {
                let color = match record.feedback.get(i) {
                    Some(LetterFeedback::Correct) => Color::Green,
                    Some(LetterFeedback::Present) => Color::Yellow,
                    _ => Color::DarkGray,
                };
                spans.push(tile(letter as char, color));
            }
            None => spans.push(empty_tile()),
        }
    }
    Line::from(spans)
}

fn pending_row(input: &str, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(width);
    let bytes = input.as_bytes();
    for i in 0..width {
        match bytes.get(i) {
            Some(&letter) => spans.push(tile(letter as char, Color::Gray)),
            None => spans.push(empty_tile()),
        }
    }
    Line::from(spans)
}

fn tile(letter: char, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

fn empty_tile() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

fn render_keyboard(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len());
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .map(|key| {
                let style = match snapshot.key_for(key) {
                    KeyFeedback::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                    KeyFeedback::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
                    KeyFeedback::Absent => Style::default().fg(Color::DarkGray),
                    KeyFeedback::Unused => Style::default().fg(Color::White),
                };
                Span::styled(format!(" {key} "), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_sidebar(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .guesses
        .iter()
        .map(|record| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    record.name.text().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!(
                        "{} | {}",
                        record.entry.types.join("/"),
                        record.entry.generation
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Guessed Pokémon "),
    );
    f.render_widget(list, area);
}

/// Centered rect of the given size inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
