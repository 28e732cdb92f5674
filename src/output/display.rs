//! Display functions for command results

use super::formatters::{format_board, score_bar};
use crate::commands::{AggregateResult, BenchmarkResult, RankResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let mark = if step.was_correct {
            "✓".green()
        } else {
            "✗".red()
        };
        let guess = if step.is_word_guess {
            format!("word '{}'", step.guess.to_uppercase())
        } else {
            format!("letter '{}'", step.guess.to_uppercase())
        };

        println!(
            "\nTurn {}: {} {} → {}",
            turn,
            guess,
            mark,
            format_board(&step.board_after)
        );

        if verbose {
            println!("  Candidates before: {}", step.candidates_before);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} guesses ({} correct, {} wrong)",
            result.guess_count, result.correct_count, result.incorrect_count
        )
        .green()
        .bold()
    );
    println!(
        "   Used letters: {}   Remaining budget: {}",
        result.used_letters, result.remaining_guesses
    );
}

/// Print the letter ranking of a board position
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}   used: [{}]   heuristic: {}",
        format_board(&result.board).bright_yellow().bold(),
        result.used_letters,
        result.heuristic.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("{} candidates remain\n", result.candidate_count);

    let best = result.scores.first().map_or(0.0, |(_, score)| *score);
    for (letter, score) in result.scores.iter().take(10) {
        println!(
            "  {}  {} {:.4}",
            letter.to_ascii_uppercase().to_string().bold(),
            score_bar(*score, best, 30),
            score
        );
    }

    match &result.recommendation.word {
        Some(word) => println!(
            "\nSuggestion: guess the word {}",
            word.text().to_uppercase().bright_green().bold()
        ),
        None => println!(
            "\nSuggestion: guess '{}'",
            (result.recommendation.letter as char)
                .to_ascii_uppercase()
                .to_string()
                .bright_green()
                .bold()
        ),
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60));
    println!(" Benchmark Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Performance".bright_cyan().bold());
    println!("  Words played:        {}", result.total_words);
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Average misses:      {}",
        format!("{:.3}", result.average_wrong_guesses).yellow()
    );
    println!(
        "  Guess range:         {} - {}",
        result.min_guesses, result.max_guesses
    );
    println!(
        "  Total time:          {:.2}s ({:.0} words/s)",
        result.duration.as_secs_f64(),
        result.words_per_second
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *result.distribution.values().max().unwrap_or(&1);
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    buckets.sort_unstable();

    for (guesses, count) in buckets {
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:3} guesses: {bar} {count:4}");
    }
}

/// Print per-length aggregate statistics
pub fn print_aggregate_result(result: &AggregateResult) {
    println!("\n{}", "═".repeat(60));
    println!(" Aggregate Results ");
    println!("{}", "═".repeat(60));

    println!("\n  Games aggregated: {}", result.entries);
    println!(
        "  Per letter of word length: {} guesses, {} correct, {} wrong\n",
        format!("{:.3}", result.overall_guesses_per_letter)
            .bright_yellow()
            .bold(),
        format!("{:.3}", result.overall_correct_per_letter).green(),
        format!("{:.3}", result.overall_wrong_per_letter).red()
    );

    println!(
        "  {:>6} {:>6} {:>12} {:>12} {:>12}",
        "length".bold(),
        "games".bold(),
        "guesses/ltr".bold(),
        "correct/ltr".bold(),
        "wrong/ltr".bold()
    );
    for row in &result.per_length {
        println!(
            "  {:>6} {:>6} {:>7.3} ±{:<4.3} {:>7.3} ±{:<4.3} {:>7.3} ±{:<4.3}",
            row.word_length,
            row.games,
            row.avg_guesses_per_letter,
            row.var_guesses_per_letter.sqrt(),
            row.avg_correct_per_letter,
            row.var_correct_per_letter.sqrt(),
            row.avg_wrong_per_letter,
            row.var_wrong_per_letter.sqrt()
        );
    }
}
