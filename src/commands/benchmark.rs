//! Benchmark command
//!
//! Tests solver performance across a random sample of dictionary words.

use crate::core::Word;
use crate::game::HangmanGame;
use crate::solver::{Solver, Strategy};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub total_wrong_guesses: usize,
    pub average_guesses: f64,
    pub average_wrong_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// guess count → number of games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw `count` random secret words from the dictionary
#[must_use]
pub fn sample_words(dictionary: &[Word], count: usize) -> Vec<Word> {
    dictionary
        .choose_multiple(&mut rand::rng(), count.min(dictionary.len()))
        .cloned()
        .collect()
}

/// Run a benchmark over the given secret words
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    target_words: &[Word],
    wrong_guess_limit: i64,
) -> BenchmarkResult {
    let start = Instant::now();

    if target_words.is_empty() {
        return BenchmarkResult {
            total_words: 0,
            total_guesses: 0,
            total_wrong_guesses: 0,
            average_guesses: 0.0,
            average_wrong_guesses: 0.0,
            min_guesses: 0,
            max_guesses: 0,
            distribution: HashMap::new(),
            duration: start.elapsed(),
            words_per_second: 0.0,
        };
    }

    let mut total_guesses = 0;
    let mut total_wrong = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in target_words {
        let mut game = HangmanGame::new(target.clone(), wrong_guess_limit);
        let mut guesses = 0;
        let mut wrong = 0;

        while !game.is_complete() {
            let Ok(guess) = solver.next_guess(game.board(), game.used_letters()) else {
                break;
            };

            let outcome = match &guess.word {
                Some(word) => game.guess_word(word.text()),
                None => game.guess_letter(guess.letter),
            };

            guesses += 1;
            if !outcome.was_correct {
                wrong += 1;
            }
        }

        total_guesses += guesses;
        total_wrong += wrong;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        total_guesses,
        total_wrong_guesses: total_wrong,
        average_guesses: total_guesses as f64 / total_words as f64,
        average_wrong_guesses: total_wrong as f64 / total_words as f64,
        min_guesses,
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}
