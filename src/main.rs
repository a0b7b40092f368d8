//! Wordless - CLI
//!
//! Wordle assistant with a TUI grid, a line-based mode and one-shot commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use wordless::{
    commands::{
        SolveConfig, list_candidates, resolve_opening, run_benchmark, run_simple, sample_targets,
        simulate, solve_word, suggest,
    },
    core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH},
    output::{
        formatters::progress_style, print_benchmark_result, print_candidates, print_simulation,
        print_solve_result, print_suggestion,
    },
    solver::Solver,
    wordlists::{WordLists, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordless",
    about = "Wordle assistant: narrows the candidates from your feedback and suggests the most informative next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length to play with
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(MIN_WORD_LENGTH as i64..=MAX_WORD_LENGTH as i64)
    )]
    length: u8,

    /// Dictionary of accepted guesses (whitespace-separated words)
    #[arg(long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Answer list to draw candidates from (whitespace-separated words)
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI grid (default)
    Play,

    /// Line-based mode: type annotated guesses, get suggestions
    Simple,

    /// List the words consistent with the given guesses
    Candidates {
        /// Annotated guesses, e.g. f=oun+d ('=' green, '+' yellow)
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Which list to filter
        #[arg(long, value_enum, default_value_t = WordSource::Answers)]
        source: WordSource,
    },

    /// Suggest the next guess after the given guesses
    Suggest {
        /// Annotated guesses, e.g. f=oun+d ('=' green, '+' yellow)
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show the feedback a guess would get against an answer
    Simulate {
        guess: String,
        answer: String,
    },

    /// Auto-play the recommender against a known answer
    Solve {
        /// The target word to solve
        target: String,

        /// First guess to play instead of the computed opening
        #[arg(long)]
        start: Option<String>,

        /// Give up after this many guesses
        #[arg(long, default_value_t = 6)]
        max_turns: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve a random sample of answers and report the guess distribution
    Benchmark {
        /// Number of random answers to solve
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// First guess to play instead of the computed opening
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play));

    let lists = WordLists::load(cli.dictionary.as_deref(), cli.answers.as_deref())
        .context("failed to load word lists")?;
    let solver = Solver::new(&lists);
    let length = usize::from(cli.length);

    match command {
        Commands::Play => wordless::interactive::run_tui(&lists, length),
        Commands::Simple => run_simple(&solver, length).context("simple mode failed"),
        Commands::Candidates { guesses, source } => {
            let words = list_candidates(&solver, &guesses, length, source)?;
            print_candidates(&words, source);
            Ok(())
        }
        Commands::Suggest { guesses } => {
            let result = suggest(&solver, &guesses, length)?;
            print_suggestion(&result);
            Ok(())
        }
        Commands::Simulate { guess, answer } => {
            print_simulation(&simulate(&guess, &answer)?);
            Ok(())
        }
        Commands::Solve {
            target,
            start,
            max_turns,
            verbose,
        } => run_solve_command(&solver, target, start.as_deref(), max_turns, verbose),
        Commands::Benchmark { count, seed, start } => {
            run_benchmark_command(&solver, length, count, seed, start.as_deref())
        }
    }
}

/// Route `log` output to stderr
///
/// `RUST_LOG` wins when set. Otherwise warnings are shown, except in the
/// full-screen TUI where any output would tear the display.
fn init_logging(full_screen: bool) {
    let default = if full_screen { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run_solve_command(
    solver: &Solver,
    target: String,
    start: Option<&str>,
    max_turns: usize,
    verbose: bool,
) -> Result<()> {
    let length = target.trim().len();
    let mut config = SolveConfig::new(target);
    config.max_guesses = max_turns;
    config.opening = resolve_opening(solver, start, length)?;

    let result = solve_word(config, solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver,
    length: usize,
    count: usize,
    seed: Option<u64>,
    start: Option<&str>,
) -> Result<()> {
    let targets = sample_targets(solver, length, count, seed);
    if targets.is_empty() {
        anyhow::bail!("no {length}-letter answers to benchmark");
    }

    println!("Choosing an opening guess...");
    let opening = resolve_opening(solver, start, length)?;
    if let Some(word) = opening {
        println!("Running benchmark on {} random words, opening with {}...", targets.len(), word);
    }

    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(progress_style()?);

    let result = run_benchmark(solver, &targets, opening, &progress)?;
    print_benchmark_result(&result);
    Ok(())
}
