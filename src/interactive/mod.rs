//! Interactive TUI interface
//!
//! A full-screen guess grid. Finished rows are scored on a background
//! worker so the screen stays responsive.

mod app;
mod rendering;
mod worker;

pub use app::{App, Message, MessageStyle, Suggestion, run_tui};
pub use worker::{RecommendationWorker, Reply};
