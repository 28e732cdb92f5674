//! Hangman Solver - CLI
//!
//! Plays and evaluates Hangman with interchangeable letter-scoring
//! heuristics over an arbitrary dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        SolveConfig, aggregate_records, last_game_number, load_records, rank_board, run_benchmark,
        run_games, run_simple, sample_words, solve_word, write_aggregate, write_records,
    },
    core::Word,
    output::{
        print_aggregate_result, print_benchmark_result, print_rank_result, print_solve_result,
    },
    solver::{Solver, Strategy, StrategyType},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver using candidate filtering and letter-scoring heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Heuristic: frequency (default), occurrence, absence,
    /// avgOccurrenceInWord, positionsInWord
    #[arg(short = 'H', long, global = true, default_value = "frequency")]
    heuristic: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Wrong-guess budget per game (informational; never ends a game)
    #[arg(short = 'b', long, global = true, default_value = "8")]
    budget: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: think of a word, the solver guesses it (default)
    Simple,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank the remaining letters for a board position
    Rank {
        /// Board string, letters and '_' placeholders, e.g. "j__z"
        board: String,

        /// Letters already guessed, e.g. "jae"
        #[arg(default_value = "")]
        used: String,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Run one game per dictionary word and write a results CSV
    TestAll {
        /// Output CSV path
        #[arg(short, long, default_value = "outFiles/results.csv")]
        out: String,

        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Continue an interrupted run from the last recorded game
        #[arg(short, long)]
        resume: bool,
    },

    /// Aggregate a results CSV per word length
    Aggregate {
        /// Results CSV produced by test-all
        input: String,

        /// Aggregate CSV path
        #[arg(short, long, default_value = "aggFiles/aggData.csv")]
        out: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use hangman_solver::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load dictionary from '{path}'"))?;
            anyhow::ensure!(!words.is_empty(), "dictionary '{path}' contains no words");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.heuristic);
    let solver = Solver::new(strategy, &dictionary);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let mut config = SolveConfig::new(word);
            config.wrong_guess_limit = cli.budget;

            let result = solve_word(&config, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Rank { board, used } => {
            let result = rank_board(&board, &used, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_rank_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random words with the {} heuristic...",
                solver.strategy().name()
            );
            let targets = sample_words(&dictionary, count);
            let result = run_benchmark(&solver, &targets, cli.budget);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { out, limit, resume } => {
            run_test_all_command(&solver, &dictionary, &out, limit, resume, cli.budget)
        }
        Commands::Aggregate { input, out } => {
            let records = load_records(&input)
                .with_context(|| format!("failed to read results from '{input}'"))?;
            let result = aggregate_records(&records);
            write_aggregate(&out, &result)
                .with_context(|| format!("failed to write aggregate to '{out}'"))?;
            print_aggregate_result(&result);
            println!("\nAggregate data written to {out}");
            Ok(())
        }
    }
}

fn run_test_all_command<S: Strategy + Sync>(
    solver: &Solver<S>,
    dictionary: &[Word],
    out: &str,
    limit: Option<usize>,
    resume: bool,
    budget: i64,
) -> Result<()> {
    let start = if resume { last_game_number(out) } else { 0 };
    if start > 0 {
        println!(
            "Resuming {out} from game {} of {}",
            start + 1,
            dictionary.len()
        );
    } else {
        println!(
            "Testing {} words with the {} heuristic",
            dictionary.len(),
            solver.strategy().name()
        );
    }

    if let Some(parent) = std::path::Path::new(out).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }

    let records = run_games(solver, dictionary, start, limit, budget);
    write_records(out, &records, start > 0)
        .with_context(|| format!("failed to write results to '{out}'"))?;

    println!("{} game records written to {out}", records.len());
    Ok(())
}
