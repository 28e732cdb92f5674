//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod board;
mod letters;
mod word;

pub use board::{Board, BoardError, PLACEHOLDER};
pub use letters::LetterSet;
pub use word::{Word, WordError};
