//! Feedback simulation command

use crate::core::{Word, WordError, WordGuess, simulate_guess};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulateError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error("{guess} and {answer} differ in length")]
    LengthMismatch { guess: String, answer: String },
}

/// Feedback `guess` would receive if `answer` were the solution
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn simulate(guess: &str, answer: &str) -> Result<WordGuess, SimulateError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    if guess.len() != answer.len() {
        return Err(SimulateError::LengthMismatch {
            guess: guess.text().to_string(),
            answer: answer.text().to_string(),
        });
    }
    Ok(simulate_guess(&guess, &answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulates_feedback() {
        assert_eq!(simulate("speed", "erase").unwrap().to_string(), "+SP+E+ED");
        assert_eq!(simulate("TODAY", "today").unwrap().to_string(), "=T=O=D=A=Y");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(matches!(
            simulate("cat", "today"),
            Err(SimulateError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(matches!(simulate("c4t", "dog"), Err(SimulateError::Word(_))));
    }
}
