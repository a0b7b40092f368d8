//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the parallel selection of the most informative guess.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{Cancelled, select_best_guess, select_best_guess_cancellable};
