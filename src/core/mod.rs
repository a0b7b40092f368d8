//! Core domain types for Wordle feedback
//!
//! This module contains the fundamental value types and the two pure
//! leaf operations of the engine: parsing annotated guesses and simulating
//! the feedback a guess would receive. Nothing here holds shared state.

mod feedback;
mod letters;
mod parse;
mod pattern;
mod word;

pub use feedback::{LetterGuess, LetterResult, WordGuess};
pub use letters::LetterSet;
pub use parse::{FormatIssue, GuessError, parse_guess};
pub use pattern::{Pattern, simulate_guess};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
