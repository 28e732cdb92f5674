//! Hangman turn engine
//!
//! Owns the secret word, the board, the guessed-letter history, and the
//! wrong-guess budget. State is only mutated through the two guess
//! operations and freezes once the game is complete.

use crate::core::{Board, LetterSet, Word};

/// Snapshot returned after every guess operation
///
/// Mirrors what an observer of the game may see: the secret word itself is
/// never part of the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub board: String,
    pub used_letters: String,
    pub remaining_guesses: i64,
    pub was_correct: bool,
}

/// A single Hangman game
///
/// `remaining_guesses` is informational only: it decrements on every wrong
/// guess, going negative once the budget is spent, and never ends the game.
/// The game completes only when the board has no placeholders left or the
/// secret word is guessed outright.
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: Word,
    board: Board,
    used: LetterSet,
    remaining_guesses: i64,
    complete: bool,
}

impl HangmanGame {
    /// Start a game over `secret` with the given wrong-guess budget
    #[must_use]
    pub fn new(secret: Word, wrong_guess_limit: i64) -> Self {
        let board = Board::hidden(secret.len());
        Self {
            secret,
            board,
            used: LetterSet::new(),
            remaining_guesses: wrong_guess_limit,
            complete: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn used_letters(&self) -> &LetterSet {
        &self.used
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> i64 {
        self.remaining_guesses
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Guess a single letter
    ///
    /// The letter is recorded in the history unconditionally, repeats
    /// included. A hit reveals every matching board position; a miss
    /// decrements `remaining_guesses`. The game completes when the board
    /// has no placeholders left.
    ///
    /// Calling this after completion is a no-op: the current state is
    /// returned unchanged with `was_correct` false.
    pub fn guess_letter(&mut self, letter: u8) -> GuessOutcome {
        if self.complete {
            return self.outcome(false);
        }

        self.used.push(letter);

        let was_correct = self.board.reveal(&self.secret, letter);
        if !was_correct {
            self.remaining_guesses -= 1;
        }

        if self.board.is_complete() {
            self.complete = true;
        }

        self.outcome(was_correct)
    }

    /// Guess the whole word
    ///
    /// An exact match reveals the full board and completes the game; a miss
    /// decrements `remaining_guesses` and leaves the board untouched.
    ///
    /// Calling this after completion is a no-op: the current state is
    /// returned unchanged with `was_correct` false.
    pub fn guess_word(&mut self, word: &str) -> GuessOutcome {
        if self.complete {
            return self.outcome(false);
        }

        if word == self.secret.text() {
            self.board.reveal_all(&self.secret);
            self.complete = true;
            self.outcome(true)
        } else {
            self.remaining_guesses -= 1;
            self.outcome(false)
        }
    }

    fn outcome(&self, was_correct: bool) -> GuessOutcome {
        GuessOutcome {
            board: self.board.to_string(),
            used_letters: self.used.to_string(),
            remaining_guesses: self.remaining_guesses,
            was_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str, budget: i64) -> HangmanGame {
        HangmanGame::new(Word::new(secret).unwrap(), budget)
    }

    #[test]
    fn jazz_scenario_board_progression() {
        let mut game = game("jazz", 8);
        assert_eq!(game.board().to_string(), "____");

        let o1 = game.guess_letter(b'j');
        assert_eq!(o1.board, "j___");
        assert!(o1.was_correct);
        assert!(!game.is_complete());

        let o2 = game.guess_letter(b'a');
        assert_eq!(o2.board, "ja__");
        assert!(o2.was_correct);
        assert!(!game.is_complete());

        let o3 = game.guess_letter(b'z');
        assert_eq!(o3.board, "jazz");
        assert!(o3.was_correct);
        assert!(game.is_complete());

        // No incorrect guesses, so the budget never moved
        assert_eq!(o3.remaining_guesses, 8);
        assert_eq!(o3.used_letters, "jaz");
    }

    #[test]
    fn wrong_letter_decrements_budget_only() {
        let mut game = game("cats", 8);

        let outcome = game.guess_letter(b'f');
        assert_eq!(outcome.board, "____");
        assert_eq!(outcome.used_letters, "f");
        assert_eq!(outcome.remaining_guesses, 7);
        assert!(!outcome.was_correct);
        assert!(!game.is_complete());
    }

    #[test]
    fn correct_word_guess_completes() {
        let mut game = game("cats", 8);
        game.guess_letter(b'x');

        let outcome = game.guess_word("cats");
        assert_eq!(outcome.board, "cats");
        assert!(outcome.was_correct);
        assert!(game.is_complete());
        // Prior used letters are untouched by a word guess
        assert_eq!(outcome.used_letters, "x");
    }

    #[test]
    fn wrong_word_guess_leaves_board() {
        let mut game = game("cats", 8);

        let outcome = game.guess_word("dogs");
        assert_eq!(outcome.board, "____");
        assert_eq!(outcome.remaining_guesses, 7);
        assert!(!outcome.was_correct);
        assert!(!game.is_complete());
    }

    #[test]
    fn budget_goes_negative_without_ending_game() {
        let mut game = game("cat", 1);

        game.guess_letter(b'x');
        game.guess_letter(b'y');
        let outcome = game.guess_letter(b'z');

        assert_eq!(outcome.remaining_guesses, -2);
        assert!(!game.is_complete());

        // Still winnable after the budget is long gone
        game.guess_letter(b'c');
        game.guess_letter(b'a');
        let last = game.guess_letter(b't');
        assert!(game.is_complete());
        assert_eq!(last.board, "cat");
    }

    #[test]
    fn repeated_wrong_letter_decrements_again() {
        let mut game = game("cat", 8);

        game.guess_letter(b'x');
        let outcome = game.guess_letter(b'x');

        assert_eq!(outcome.remaining_guesses, 6);
        assert_eq!(outcome.used_letters, "xx");
    }

    #[test]
    fn post_completion_guesses_are_noops() {
        let mut game = game("cat", 8);
        game.guess_word("cat");
        assert!(game.is_complete());

        let after_letter = game.guess_letter(b'q');
        assert_eq!(after_letter.board, "cat");
        assert_eq!(after_letter.used_letters, "");
        assert_eq!(after_letter.remaining_guesses, 8);
        assert!(!after_letter.was_correct);

        let after_word = game.guess_word("dog");
        assert_eq!(after_word.remaining_guesses, 8);
        assert!(!after_word.was_correct);
    }

    #[test]
    fn terminates_within_word_length_correct_guesses() {
        let secret = "brook";
        let mut game = game(secret, 8);

        let mut correct = 0;
        while !game.is_complete() {
            // Perfect information: always guess a known remaining letter
            let next = game
                .board()
                .cells()
                .zip(game.secret().chars())
                .find(|(cell, _)| cell.is_none())
                .map(|(_, &ch)| ch)
                .unwrap();
            let outcome = game.guess_letter(next);
            assert!(outcome.was_correct);
            correct += 1;
            assert!(correct <= secret.len());
        }

        assert_eq!(game.board().to_string(), secret);
    }
}
