//! Candidate listing command

use crate::core::{GuessError, Word};
use crate::solver::Solver;
use crate::wordlists::WordSource;

use super::parse_guesses;

/// Words of `source` consistent with the annotated guesses
///
/// # Errors
///
/// Returns an error if any guess is malformed or not `word_length` letters
/// long.
pub fn list_candidates<'a, S: AsRef<str>>(
    solver: &Solver<'a>,
    guesses: &[S],
    word_length: usize,
    source: WordSource,
) -> Result<Vec<&'a Word>, GuessError> {
    let guesses = parse_guesses(guesses, word_length)?;
    Ok(solver.candidates(&guesses, word_length, source))
}
