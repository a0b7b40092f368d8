//! Command implementations

pub mod benchmark;
pub mod candidates;
pub mod simple;
pub mod simulate;
pub mod solve;
pub mod suggest;

use crate::core::{GuessError, WordGuess, parse_guess};

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use candidates::list_candidates;
pub use simple::{run_session, run_simple};
pub use simulate::{SimulateError, simulate};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, resolve_opening, solve_word};
pub use suggest::{SuggestResult, suggest};

/// Parse annotated guesses given on the command line
///
/// # Errors
///
/// Returns the error for the first guess that is malformed or does not have
/// `word_length` letters.
pub fn parse_guesses<S: AsRef<str>>(
    texts: &[S],
    word_length: usize,
) -> Result<Vec<WordGuess>, GuessError> {
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            let guess = parse_guess(text)?;
            if guess.len() == word_length {
                Ok(guess)
            } else {
                Err(GuessError::WrongLength {
                    input: text.to_string(),
                    expected: word_length,
                    found: guess.len(),
                })
            }
        })
        .collect()
}
