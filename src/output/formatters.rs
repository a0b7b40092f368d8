//! Formatting utilities for terminal output

use crate::core::{LetterResult, Pattern, WordGuess};
use colored::Colorize;
use indicatif::ProgressStyle;
use indicatif::style::TemplateError;

/// Format a feedback row as emoji squares
///
/// Rows too long to encode as a pattern render as an empty string.
#[must_use]
pub fn guess_to_emoji(guess: &WordGuess) -> String {
    Pattern::from_guess(guess).map_or_else(String::new, Pattern::to_emoji)
}

/// Render a feedback row as coloured letter tiles
#[must_use]
pub fn colored_guess(guess: &WordGuess) -> String {
    guess
        .iter()
        .map(|tile| {
            let cell = format!(" {} ", char::from(tile.letter()));
            match tile.result() {
                LetterResult::Correct => cell.black().on_green().bold().to_string(),
                LetterResult::Present => cell.black().on_yellow().bold().to_string(),
                LetterResult::Absent => cell.white().on_bright_black().to_string(),
                LetterResult::Unknown => cell,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2(64)
    create_progress_bar(entropy, max_entropy, width)
}

/// Style shared by long-running commands
///
/// # Errors
///
/// Returns an error if the template fails to parse.
pub fn progress_style() -> Result<ProgressStyle, TemplateError> {
    Ok(ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
        .progress_chars("█▓▒░"))
}
