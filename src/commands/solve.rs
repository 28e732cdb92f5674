//! Word solving command
//!
//! Plays a full game against a known secret word and returns the solution
//! path.

use crate::core::Word;
use crate::game::HangmanGame;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub wrong_guess_limit: i64,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            wrong_guess_limit: 8,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<GuessStep>,
    pub guess_count: usize,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub used_letters: String,
    pub remaining_guesses: i64,
}

/// A single turn in the solution
pub struct GuessStep {
    /// Board before the guess, display form
    pub board_before: String,
    /// Board after the guess
    pub board_after: String,
    /// The guessed letter, or the whole word when one candidate remained
    pub guess: String,
    pub is_word_guess: bool,
    pub was_correct: bool,
    pub candidates_before: usize,
}

/// Play a game against `config.target` with the given solver
///
/// Each turn filters the dictionary by the board and guess history, ranks
/// the remaining letters, and feeds the recommendation back into the state
/// machine. A single surviving candidate is guessed as a whole word.
///
/// # Errors
///
/// Returns an error if the target word is invalid, if no dictionary word is
/// consistent with the evidence (the target is missing from the
/// dictionary), or if a whole-word guess misses — both mean the dictionary
/// cannot produce this word.
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut game = HangmanGame::new(target, config.wrong_guess_limit);
    let mut steps: Vec<GuessStep> = Vec::new();
    let mut correct_count = 0;
    let mut incorrect_count = 0;

    while !game.is_complete() {
        let board_before = game.board().to_string();
        let candidates_before = solver.count_candidates(game.board(), game.used_letters());

        let guess = solver
            .next_guess(game.board(), game.used_letters())
            .map_err(|e| e.to_string())?;

        let (label, is_word_guess, outcome) = match &guess.word {
            Some(word) => (word.text().to_string(), true, game.guess_word(word.text())),
            None => (
                (guess.letter as char).to_string(),
                false,
                game.guess_letter(guess.letter),
            ),
        };

        if outcome.was_correct {
            correct_count += 1;
        } else {
            incorrect_count += 1;
            if is_word_guess {
                // The only candidate is not the secret; the dictionary
                // cannot produce this word
                return Err(format!(
                    "last candidate '{label}' is not the secret word"
                ));
            }
        }

        steps.push(GuessStep {
            board_before,
            board_after: outcome.board,
            guess: label,
            is_word_guess,
            was_correct: outcome.was_correct,
            candidates_before,
        });
    }

    Ok(SolveResult {
        target: config.target.clone(),
        guess_count: steps.len(),
        correct_count,
        incorrect_count,
        used_letters: game.used_letters().to_string(),
        remaining_guesses: game.remaining_guesses(),
        steps,
    })
}
