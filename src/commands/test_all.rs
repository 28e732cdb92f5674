//! Full-dictionary evaluation
//!
//! Plays one game per dictionary word and writes one CSV record per
//! completed game. Games are independent and share only the read-only
//! dictionary, so they run in parallel; records are collected in dictionary
//! order and written in a single pass at the end, never interleaved.

use crate::core::Word;
use crate::game::HangmanGame;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// CSV header for per-game records
pub const RECORD_HEADER: &str =
    "gameNumber,word,wordLength,guessCount,correctGuessCount,incorrectGuessCount,usedLetters";

/// One completed game, one CSV line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_number: usize,
    pub word: String,
    pub word_length: usize,
    pub guess_count: usize,
    pub correct_guess_count: usize,
    pub incorrect_guess_count: usize,
    pub used_letters: String,
}

impl GameRecord {
    /// Render as a CSV line (no terminator)
    #[must_use]
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.game_number,
            self.word,
            self.word_length,
            self.guess_count,
            self.correct_guess_count,
            self.incorrect_guess_count,
            self.used_letters
        )
    }

    /// Parse a CSV line produced by `to_csv`
    #[must_use]
    pub fn from_csv(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 7 {
            return None;
        }

        let word = fields[1].to_string();
        let word_length: usize = fields[2].parse().ok()?;
        // Length zero (or a length disagreeing with the word) would poison
        // downstream per-letter aggregation
        if word_length == 0 || word_length != word.len() {
            return None;
        }

        Some(Self {
            game_number: fields[0].parse().ok()?,
            word,
            word_length,
            guess_count: fields[3].parse().ok()?,
            correct_guess_count: fields[4].parse().ok()?,
            incorrect_guess_count: fields[5].parse().ok()?,
            used_letters: fields[6].to_string(),
        })
    }
}

/// Play one game with `secret` drawn from the solver's own dictionary
///
/// The secret is in the dictionary, so the candidate set can never empty
/// out and the final whole-word guess always lands.
fn play_game<S: Strategy + Sync>(
    solver: &Solver<S>,
    secret: &Word,
    game_number: usize,
    wrong_guess_limit: i64,
) -> GameRecord {
    let mut game = HangmanGame::new(secret.clone(), wrong_guess_limit);
    let mut guess_count = 0;
    let mut correct = 0;
    let mut incorrect = 0;

    while !game.is_complete() {
        let Ok(guess) = solver.next_guess(game.board(), game.used_letters()) else {
            // Unreachable for in-dictionary secrets; stop rather than spin
            break;
        };

        let outcome = match &guess.word {
            Some(word) => game.guess_word(word.text()),
            None => game.guess_letter(guess.letter),
        };

        guess_count += 1;
        if outcome.was_correct {
            correct += 1;
        } else {
            incorrect += 1;
        }
    }

    GameRecord {
        game_number,
        word: secret.text().to_string(),
        word_length: secret.len(),
        guess_count,
        correct_guess_count: correct,
        incorrect_guess_count: incorrect,
        used_letters: game.used_letters().to_string(),
    }
}

/// Run games for every dictionary word from `start` (0-based) onward
///
/// Parallel over words; the returned records are in dictionary order.
pub fn run_games<S: Strategy + Sync>(
    solver: &Solver<S>,
    dictionary: &[Word],
    start: usize,
    limit: Option<usize>,
    wrong_guess_limit: i64,
) -> Vec<GameRecord> {
    let test_words: &[Word] = &dictionary[start.min(dictionary.len())..];
    let test_words = &test_words[..limit.unwrap_or(test_words.len()).min(test_words.len())];

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let records: Vec<GameRecord> = test_words
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            // Game numbers are 1-based and continue a resumed file
            let record = play_game(solver, secret, start + i + 1, wrong_guess_limit);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    records
}

/// Read the last game number from an existing results file
///
/// Returns 0 when the file is missing, empty, or holds only the header, so
/// a fresh run starts at word one.
#[must_use]
pub fn last_game_number<P: AsRef<Path>>(path: P) -> usize {
    let Ok(content) = fs::read_to_string(path) else {
        return 0;
    };

    content
        .lines()
        .rev()
        .find_map(GameRecord::from_csv)
        .map_or(0, |record| record.game_number)
}

/// Write records as CSV
///
/// A fresh file gets the header; appending continues an existing file.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_records<P: AsRef<Path>>(
    path: P,
    records: &[GameRecord],
    append: bool,
) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(append)
        .write(true)
        .truncate(!append)
        .open(path)?;

    if !append {
        write!(file, "{RECORD_HEADER}")?;
    }

    for record in records {
        write!(file, "\n{}", record.to_csv())?;
    }

    Ok(())
}
