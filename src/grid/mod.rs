//! Guess grid editing
//!
//! The mutable board a host edits letter by letter before handing finished
//! rows to the solver.

mod position;
mod state;

pub use position::Position;
pub use state::{GuessGrid, Tile};
