//! Simple interactive CLI mode
//!
//! Line-based assistant without TUI: enter each guess in annotated form
//! (`=` before a green letter, `+` before a yellow one) and get the
//! remaining candidates and a suggestion back.

use crate::core::{WordGuess, parse_guess};
use crate::output::formatters::colored_guess;
use crate::solver::{Solver, build_match_state};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(solver: &Solver, word_length: usize) -> io::Result<()> {
    let stdin = io::stdin();
    run_session(solver, word_length, &mut stdin.lock(), &mut io::stdout())
}

/// Drive one session from `input`, writing everything to `out`
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver,
    word_length: usize,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} ({word_length}-letter words)",
        "Wordle assistant".bright_cyan().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    print_usage(out)?;

    let mut history: Vec<WordGuess> = Vec::new();

    loop {
        let prompt = format!("Guess {}", history.len() + 1);
        let Some(line) = get_user_input(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "help" | "?" => print_usage(out)?,
            "new" | "n" => {
                history.clear();
                writeln!(out, "🔄 New game started!")?;
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    writeln!(out, "✓ Undone! Back to guess {}", history.len() + 1)?;
                    report(solver, word_length, &history, out)?;
                } else {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            "words" | "w" => {
                for word in solver.candidates(&history, word_length, WordSource::Answers) {
                    writeln!(out, "  {}", word.text())?;
                }
            }
            _ => match parse_guess(&line) {
                Ok(guess) if guess.len() != word_length => {
                    writeln!(
                        out,
                        "{}",
                        format!(
                            "❌ Expected {word_length} letters, got {}",
                            guess.len()
                        )
                        .red()
                    )?;
                }
                Ok(guess) => {
                    writeln!(out, "   {}", colored_guess(&guess))?;
                    let solved = guess.is_solved();
                    history.push(guess);
                    if solved {
                        writeln!(
                            out,
                            "{}",
                            format!("🎉 Solved in {} guesses!", history.len())
                                .green()
                                .bold()
                        )?;
                        writeln!(out, "Type 'new' for another game or 'quit' to exit.")?;
                    } else {
                        report(solver, word_length, &history, out)?;
                    }
                }
                Err(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
            },
        }
    }

    writeln!(out, "👋 Thanks for playing!")?;
    Ok(())
}

/// Show what the engine makes of the history so far
fn report<W: Write>(
    solver: &Solver,
    word_length: usize,
    history: &[WordGuess],
    out: &mut W,
) -> io::Result<()> {
    for conflict in build_match_state(history, word_length).conflicts() {
        writeln!(
            out,
            "{}",
            format!(
                "⚠ Position {} is already {}, ignoring {} from guess {}",
                conflict.position + 1,
                conflict.kept as char,
                conflict.rejected as char,
                conflict.guess_index + 1
            )
            .yellow()
        )?;
    }

    let candidates = solver.candidates(history, word_length, WordSource::Answers);
    writeln!(out, "{} candidates remaining", candidates.len())?;

    if candidates.len() <= 10 {
        for candidate in &candidates {
            writeln!(out, "  • {}", candidate.text())?;
        }
    }

    match solver.recommend(history, word_length) {
        Some(rec) => writeln!(
            out,
            "Suggested guess: {} ({:.3} bits, {:.1} expected remaining)",
            rec.word.text().bright_yellow().bold(),
            rec.metrics.entropy,
            rec.metrics.expected_remaining
        ),
        None if history.is_empty() => Ok(()),
        None => writeln!(
            out,
            "{}",
            "No candidates remain! Your feedback may be incorrect. Type 'undo'.".red()
        ),
    }
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter each guess with its feedback:")?;
    writeln!(out, "  - Put = before a green letter (correct position)")?;
    writeln!(out, "  - Put + before a yellow letter (wrong position)")?;
    writeln!(out, "  - Leave gray letters bare, e.g. f=oun+d")?;
    writeln!(out, "Commands: 'undo', 'new', 'words', 'quit'")
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
