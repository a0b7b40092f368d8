//! Wordle solving engine
//!
//! Turns a guess history into constraints, filters the word lists with them
//! and scores the remaining guesses by expected information gain.

mod constraints;
mod engine;
pub mod entropy;
mod filter;

pub use constraints::{ConstraintConflict, MatchState, build_match_state};
pub use engine::{Recommendation, Solver};
pub use entropy::Cancelled;
pub use filter::{filter_words, find_candidates};
