//! Wordless
//!
//! A Wordle assistant: record the feedback you got, see which answers are
//! still possible and which guess is expected to narrow them down the most.
//!
//! # Quick Start
//!
//! ```rust
//! use wordless::core::parse_guess;
//! use wordless::solver::Solver;
//! use wordless::wordlists::{WordLists, WordSource};
//!
//! let lists = WordLists::embedded();
//! let solver = Solver::new(&lists);
//!
//! // '=' marks a green letter, '+' a yellow one
//! let guesses = [parse_guess("f=oun+d").unwrap(), parse_guess("m=o=d=al").unwrap()];
//!
//! let candidates = solver.candidates(&guesses, 5, WordSource::Dictionary);
//! assert!(candidates.iter().any(|w| w.text() == "TODAY"));
//!
//! let best = solver.find_best_guess(&guesses, 5);
//! assert!(best.is_some());
//! ```

// Core domain types
pub mod core;

// Constraint solving and guess scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Editable guess grid
pub mod grid;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
