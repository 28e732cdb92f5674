//! Hangman game state machine

mod state;

pub use state::{GuessOutcome, HangmanGame};
