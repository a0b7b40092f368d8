//! Benchmark command
//!
//! Tests solver performance across a random sample of answers.

use super::solve::{SolveConfig, SolveError, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Targets not found within the guess limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` distinct answers of `word_length` letters
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_targets<'a>(
    solver: &Solver<'a>,
    word_length: usize,
    count: usize,
    seed: Option<u64>,
) -> Vec<&'a Word> {
    let answers = solver.lists().answers().words(word_length);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    answers.choose_multiple(&mut rng, count).collect()
}

/// Run benchmark on a set of target words
///
/// Every target is played with the same `opening`, which saves rescoring
/// the full answer set once per word.
///
/// # Errors
///
/// Returns an error if a target is not in the answer list.
pub fn run_benchmark<'a>(
    solver: &Solver<'a>,
    targets: &[&'a Word],
    opening: Option<&'a Word>,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();

    for &target in targets {
        let mut config = SolveConfig::new(target.text().to_string());
        config.opening = opening;
        let result = solve_word(config, solver)?;

        let guesses = result.guesses.len();
        if result.success {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::info!("failed to solve {} in {guesses} guesses", result.target);
            failures.push(result.target);
        }

        progress.set_message(target.text().to_string());
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    })
}
