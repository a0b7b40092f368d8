//! Next-guess suggestion command

use crate::core::GuessError;
use crate::solver::{Recommendation, Solver};
use crate::wordlists::WordSource;

use super::parse_guesses;

/// What the engine makes of a guess history
pub struct SuggestResult<'a> {
    /// Answers still consistent with the feedback
    pub candidates: usize,
    pub recommendation: Option<Recommendation<'a>>,
}

/// Recommend the next guess after the annotated guesses
///
/// # Errors
///
/// Returns an error if any guess is malformed or not `word_length` letters
/// long.
pub fn suggest<'a, S: AsRef<str>>(
    solver: &Solver<'a>,
    guesses: &[S],
    word_length: usize,
) -> Result<SuggestResult<'a>, GuessError> {
    let guesses = parse_guesses(guesses, word_length)?;
    Ok(SuggestResult {
        candidates: solver
            .candidates(&guesses, word_length, WordSource::Answers)
            .len(),
        recommendation: solver.recommend(&guesses, word_length),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordLists;

    #[test]
    fn suggests_after_banda() {
        let lists = WordLists::embedded();
        let solver = Solver::new(&lists);

        let result = suggest(&solver, &["B=ANDA"], 5).unwrap();
        let rec = result.recommendation.unwrap();

        assert!(result.candidates > 1);
        assert_eq!(rec.candidates, result.candidates);
        assert_ne!(rec.word.text(), "BANDA");
    }

    #[test]
    fn nothing_to_suggest_without_guesses() {
        let lists = WordLists::embedded();
        let solver = Solver::new(&lists);

        let result = suggest::<&str>(&solver, &[], 5).unwrap();
        assert_eq!(result.candidates, 0);
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn rejects_guess_of_another_length() {
        let lists = WordLists::embedded();
        let solver = Solver::new(&lists);

        let err = suggest(&solver, &["=b+a=n=d=a"], 6).err().unwrap();
        assert_eq!(err.to_string(), "guess \"=b+a=n=d=a\" has 5 letters, expected 6");
    }
}
