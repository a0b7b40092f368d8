//! TUI application state and logic

use crate::core::{LetterResult, Word, WordGuess};
use crate::grid::{GuessGrid, Position};
use crate::solver::{ConstraintConflict, Recommendation, Solver, build_match_state};
use crate::wordlists::{WordLists, WordSource};
use super::worker::RecommendationWorker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the event loop wakes to collect worker replies
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub grid: GuessGrid,
    pub cursor: Position,
    pub candidates: Vec<&'a Word>,
    pub conflicts: Vec<ConstraintConflict>,
    pub suggestion: Suggestion<'a>,
    pub messages: Vec<Message>,
    pub show_words: bool,
    pub show_help: bool,
    pub should_quit: bool,
    worker: RecommendationWorker<'a>,
    guesses: Vec<WordGuess>,
}

/// What the suggestion panel shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion<'a> {
    /// No finished rows yet
    Idle,
    /// The worker is scoring guesses
    Thinking,
    Ready(Option<Recommendation<'a>>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lists: &'a WordLists, word_length: usize, worker: RecommendationWorker<'a>) -> Self {
        Self {
            solver: Solver::new(lists),
            grid: GuessGrid::new(word_length),
            cursor: Position::default(),
            candidates: Vec::new(),
            conflicts: Vec::new(),
            suggestion: Suggestion::Idle,
            messages: vec![Message {
                text: "Type a guess, mark each tile with Space or = + -, then press Enter."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            show_words: false,
            show_help: false,
            should_quit: false,
            worker,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.grid.word_length()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let len = self.word_length();
        let rows = self.grid.row_count();

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab => self.show_words = !self.show_words,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.grid.set_letter(self.cursor, Some(c));
                self.cursor = self.cursor.move_right(len, rows);
            }
            KeyCode::Char(' ') => self.grid.cycle_result(self.cursor),
            KeyCode::Char('=') => self.grid.set_result(self.cursor, LetterResult::Correct),
            KeyCode::Char('+') => self.grid.set_result(self.cursor, LetterResult::Present),
            KeyCode::Char('-') => self.grid.set_result(self.cursor, LetterResult::Absent),
            KeyCode::Char('_') => self.grid.set_result(self.cursor, LetterResult::Unknown),
            KeyCode::Backspace => {
                self.grid.set_letter(self.cursor, None);
                self.cursor = self.cursor.move_left(len);
            }
            KeyCode::Delete => self.grid.set_letter(self.cursor, None),
            KeyCode::Left => self.cursor = self.cursor.move_left(len),
            KeyCode::Right => self.cursor = self.cursor.move_right(len, rows),
            KeyCode::Up => self.cursor = self.cursor.move_up(),
            KeyCode::Down => self.cursor = self.cursor.move_down(rows),
            KeyCode::Enter => self.submit_row(),
            _ => return,
        }

        self.refresh();
    }

    fn submit_row(&mut self) {
        let row = self.cursor.row;
        let Some(word) = self.grid.word(row) else {
            self.add_message("Fill every letter before submitting", MessageStyle::Error);
            return;
        };

        if self.grid.word_error(row, self.solver.lists()) {
            self.add_message(
                &format!("{word} is not in the dictionary"),
                MessageStyle::Error,
            );
        }

        self.cursor = self.grid.submit(row);

        if self.grid.row(row).iter().all(|t| t.result() == LetterResult::Correct) {
            self.add_message(&format!("Solved: {word}"), MessageStyle::Success);
        }
    }

    /// Recompute everything derived from the finished rows
    ///
    /// Does nothing while the set of finished rows is unchanged, so plain
    /// cursor moves never restart the worker.
    pub fn refresh(&mut self) {
        let guesses = self.grid.guesses();
        if guesses == self.guesses {
            return;
        }
        self.guesses = guesses;

        let len = self.word_length();
        self.candidates = self
            .solver
            .candidates(&self.guesses, len, WordSource::Answers);
        self.conflicts = build_match_state(&self.guesses, len).conflicts().to_vec();

        if self.guesses.is_empty() {
            self.worker.cancel();
            self.suggestion = Suggestion::Idle;
        } else {
            self.worker.submit(self.guesses.clone(), len);
            self.suggestion = Suggestion::Thinking;
        }
    }

    /// Collect a finished recommendation, if the worker has one
    pub fn poll_worker(&mut self) {
        if let Some(reply) = self.worker.poll() {
            self.suggestion = Suggestion::Ready(reply.recommendation);
        }
    }

    /// Rows the solver is currently working from
    #[must_use]
    pub fn guesses(&self) -> &[WordGuess] {
        &self.guesses
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(lists: &WordLists, word_length: usize) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app; the worker thread ends when the app is dropped
    let res = std::thread::scope(|scope| {
        let worker = RecommendationWorker::spawn(scope, lists);
        let app = App::new(lists, word_length, worker);
        run_app(&mut terminal, app)
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_worker();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
