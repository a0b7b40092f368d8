//! TUI rendering with ratatui
//!
//! Draws the guess grid, the candidate summary and the suggestion panel.

use super::app::{App, MessageStyle, Suggestion};
use crate::core::LetterResult;
use crate::grid::{Position, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Grid
            Constraint::Percentage(50), // Info
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("WORDLESS - {}-letter words", app.word_length()))
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

/// Background colour for a tile's feedback
const fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::Unknown => Color::Black,
        LetterResult::Absent => Color::DarkGray,
        LetterResult::Present => Color::Yellow,
        LetterResult::Correct => Color::Green,
    }
}

fn tile_span(tile: Tile, selected: bool, error: bool) -> Span<'static> {
    let letter = tile.letter().unwrap_or('·');
    let mut style = Style::default()
        .bg(result_color(tile.result()))
        .fg(if error { Color::Red } else { Color::White })
        .add_modifier(Modifier::BOLD);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if error {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(format!(" {letter} "), style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lists = app.solver.lists();
    let lines: Vec<Line> = (0..app.grid.row_count())
        .map(|row| {
            let mut spans: Vec<Span> = app
                .grid
                .row(row)
                .iter()
                .enumerate()
                .flat_map(|(column, &tile)| {
                    let pos = Position::new(row, column);
                    [
                        tile_span(tile, pos == app.cursor, app.grid.tile_error(pos)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            if app.grid.word_error(row, lists) {
                spans.push(Span::styled(
                    " not a word",
                    Style::default().fg(Color::Red),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),      // Suggestion
            Constraint::Min(5),         // Candidates
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_suggestion(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_suggestion(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.suggestion {
        Suggestion::Idle => vec![Line::from("Submit a guess to get a suggestion")],
        Suggestion::Thinking => vec![Line::from(Span::styled(
            "Thinking...",
            Style::default().fg(Color::DarkGray),
        ))],
        Suggestion::Ready(None) => vec![Line::from(Span::styled(
            "No word fits this feedback",
            Style::default().fg(Color::Red),
        ))],
        Suggestion::Ready(Some(rec)) => {
            // Entropy bar scaled to 6 bits
            let entropy_bar_len = (rec.metrics.entropy * 3.0).min(18.0) as usize;
            let entropy_bar = "█".repeat(entropy_bar_len)
                + &"░".repeat(18_usize.saturating_sub(entropy_bar_len));
            vec![
                Line::from(vec![
                    Span::raw("Suggested: "),
                    Span::styled(
                        rec.word.text().to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!(
                    "Entropy:   [{}] {:.3} bits",
                    entropy_bar, rec.metrics.entropy
                )),
                Line::from(format!(
                    "Expected:  {:.1} candidates remain",
                    rec.metrics.expected_remaining
                )),
                Line::from(format!("Worst:     {} candidates", rec.metrics.max_partition)),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Suggestion ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates.len();
    let mut lines = vec![Line::from(vec![
        Span::raw("Match count: "),
        Span::styled(
            count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    for conflict in &app.conflicts {
        lines.push(Line::from(Span::styled(
            format!(
                "Column {} is {} but guess {} says {}",
                conflict.position + 1,
                conflict.kept as char,
                conflict.guess_index + 1,
                conflict.rejected as char
            ),
            Style::default().fg(Color::Red),
        )));
    }

    if app.show_words {
        let words: Vec<&str> = app.candidates.iter().map(|w| w.text()).collect();
        lines.push(Line::from(words.join(" ")));
    } else if count > 0 {
        lines.push(Line::from(Span::styled(
            "Tab shows the words",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let position = Paragraph::new(format!(
        "Row {} Col {}",
        app.cursor.row + 1,
        app.cursor.column + 1
    ))
    .alignment(Alignment::Center);
    f.render_widget(position, chunks[0]);

    let help = Paragraph::new("?: Help | Enter: Submit | Tab: Words | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered(area, 60, 16);
    let lines = vec![
        Line::from("A-Z        type a letter and move right"),
        Line::from("Space      cycle tile colour"),
        Line::from("= + - _    correct / present / absent / unknown"),
        Line::from("Backspace  clear tile and move left"),
        Line::from("Delete     clear tile"),
        Line::from("Arrows     move"),
        Line::from("Enter      submit row"),
        Line::from("Tab        show or hide matching words"),
        Line::from("?          close this help"),
        Line::from("Esc        quit"),
    ];

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
