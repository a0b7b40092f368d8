//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_candidates, print_recommendation, print_simulation,
    print_solve_result, print_suggestion,
};
