//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, guess_to_emoji};
use crate::commands::{BenchmarkResult, SolveResult, SuggestResult};
use crate::core::{Word, WordGuess};
use crate::solver::Recommendation;
use crate::wordlists::WordSource;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.feedback),
            guess_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_before > 1 {
                println!("  Entropy:    {:.3} bits", step.entropy);
                println!("  Expected:   {:.1} candidates", step.expected_remaining);

                // Calculate information gained (reduction in uncertainty)
                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the words matching a guess history
pub fn print_candidates(words: &[&Word], source: WordSource) {
    let label = match source {
        WordSource::Answers => "answers",
        WordSource::Dictionary => "dictionary words",
    };
    println!(
        "{} matching {label}",
        words.len().to_string().bright_yellow().bold()
    );
    for word in words {
        println!("  {}", word.text());
    }
}

/// Print a recommendation with its metrics
pub fn print_recommendation(rec: &Recommendation) {
    let bar = entropy_bar(rec.metrics.entropy, 30);

    println!(
        "\n📊 Suggested guess: {}",
        rec.word.text().bright_yellow().bold()
    );
    println!(
        "   Entropy:          [{}] {}",
        bar.green(),
        format!("{:.3} bits", rec.metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected remain:  {:.1} candidates",
        rec.metrics.expected_remaining
    );
    println!(
        "   Worst case:       {} candidates",
        rec.metrics.max_partition
    );
}

/// Print the outcome of a suggestion request
pub fn print_suggestion(result: &SuggestResult) {
    println!(
        "{} candidates remaining",
        result.candidates.to_string().bright_cyan().bold()
    );
    match &result.recommendation {
        Some(rec) => print_recommendation(rec),
        None => println!("{}", "No suggestion available".red()),
    }
}

/// Print simulated feedback in annotated and coloured form
pub fn print_simulation(feedback: &WordGuess) {
    println!(
        "{}  {}  {}",
        colored_guess(feedback),
        guess_to_emoji(feedback),
        feedback.to_string().bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for word in &result.failures {
            println!("   {word}");
        }
    }
}
