//! Word solving command
//!
//! Plays the recommender against a known answer and records each turn.

use crate::core::{Word, WordError, WordGuess, simulate_guess};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Recommendation, Solver};
use crate::wordlists::WordSource;
use thiserror::Error;

/// Configuration for solving a word
pub struct SolveConfig<'a> {
    pub target: String,
    pub max_guesses: usize,
    /// First guess to play; scored from the full answer set when `None`
    pub opening: Option<&'a Word>,
}

impl SolveConfig<'_> {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
            opening: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Invalid target word: {0}")]
    InvalidTarget(#[from] WordError),

    #[error("{0} is not in the answer list")]
    UnknownTarget(String),

    #[error("{0} is not a {1}-letter dictionary word")]
    UnknownStart(String, usize),
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: WordGuess,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Pick the first guess for automated play
///
/// A given `start` word must be in the dictionary; otherwise the best
/// opening against the whole answer set is computed.
///
/// # Errors
///
/// Returns [`SolveError::UnknownStart`] if `start` is not a dictionary word
/// of `word_length` letters.
pub fn resolve_opening<'a>(
    solver: &Solver<'a>,
    start: Option<&str>,
    word_length: usize,
) -> Result<Option<&'a Word>, SolveError> {
    match start {
        Some(text) => {
            let upper = text.to_ascii_uppercase();
            solver
                .lists()
                .dictionary()
                .words(word_length)
                .iter()
                .find(|w| w.text() == upper)
                .map(Some)
                .ok_or(SolveError::UnknownStart(upper, word_length))
        }
        None => Ok(solver.opening_guess(word_length).map(|r| r.word)),
    }
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid
/// - The target is not in the answer list
pub fn solve_word<'a>(
    config: SolveConfig<'a>,
    solver: &Solver<'a>,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    let answers = solver.lists().answers();
    if !answers.contains(target.text()) {
        return Err(SolveError::UnknownTarget(target.text().to_string()));
    }

    let len = target.len();
    let mut history: Vec<WordGuess> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let recommendation = if history.is_empty() {
            opening(solver, config.opening, len)
        } else {
            solver.recommend(&history, len)
        };

        // No candidates remaining
        let Some(rec) = recommendation else {
            break;
        };

        let feedback = simulate_guess(rec.word, &target);
        history.push(feedback.clone());

        let candidates_after = solver.candidates(&history, len, WordSource::Answers).len();
        let solved = feedback.is_solved();

        guesses.push(GuessStep {
            word: rec.word.text().to_string(),
            feedback,
            candidates_before: rec.candidates,
            candidates_after,
            entropy: rec.metrics.entropy,
            expected_remaining: rec.metrics.expected_remaining,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    // Failed to solve
    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}

fn opening<'a>(
    solver: &Solver<'a>,
    word: Option<&'a Word>,
    word_length: usize,
) -> Option<Recommendation<'a>> {
    let Some(word) = word else {
        return solver.opening_guess(word_length);
    };

    let candidates: Vec<&Word> = solver
        .lists()
        .answers()
        .words(word_length)
        .iter()
        .collect();
    Some(Recommendation {
        word,
        metrics: calculate_metrics(word, &candidates),
        candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WordList, WordLists};

    fn lists() -> WordLists {
        WordLists::new(
            WordList::from_strs(&[
                "slate", "crane", "codas", "sodas", "today", "toady", "found", "modal",
            ]),
            WordList::from_strs(&["codas", "sodas", "today", "found", "modal"]),
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let lists = lists();
        let solver = Solver::new(&lists);

        let result = solve_word(SolveConfig::new("today".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "TODAY");
        assert!(result.guesses.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_records_history() {
        let lists = lists();
        let solver = Solver::new(&lists);

        let result = solve_word(SolveConfig::new("sodas".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, 5);

        // Each step should show candidate reduction (or stay same)
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let lists = lists();
        let solver = Solver::new(&lists);

        let result = solve_word(SolveConfig::new("zzzzz".to_string()), &solver);
        assert!(matches!(result, Err(SolveError::UnknownTarget(_))));

        let result = solve_word(SolveConfig::new("ab1de".to_string()), &solver);
        assert!(matches!(result, Err(SolveError::InvalidTarget(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let lists = lists();
        let solver = Solver::new(&lists);
        let mut config = SolveConfig::new("modal".to_string());
        config.max_guesses = 1;
        config.opening = lists.dictionary().words(5).first();

        let result = solve_word(config, &solver).unwrap();

        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
        assert_eq!(result.guesses[0].word, "SLATE");
    }

    #[test]
    fn forced_opening_is_played_first() {
        let lists = lists();
        let solver = Solver::new(&lists);
        let opening = resolve_opening(&solver, Some("crane"), 5).unwrap();

        let mut config = SolveConfig::new("found".to_string());
        config.opening = opening;
        let result = solve_word(config, &solver).unwrap();

        assert_eq!(result.guesses[0].word, "CRANE");
        assert!(result.success);
    }

    #[test]
    fn unknown_start_is_rejected() {
        let lists = lists();
        let solver = Solver::new(&lists);
        assert!(matches!(
            resolve_opening(&solver, Some("zzzzz"), 5),
            Err(SolveError::UnknownStart(_, 5))
        ));
        assert!(resolve_opening(&solver, None, 5).unwrap().is_some());
    }
}
