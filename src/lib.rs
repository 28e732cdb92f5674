//! Hangman Solver
//!
//! Plays and solves Hangman: filters a dictionary down to the words still
//! consistent with the board and guess history, then ranks the remaining
//! letters under one of several interchangeable heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{Board, LetterSet, Word};
//! use hangman_solver::solver::{FrequencyStrategy, Solver};
//!
//! let dictionary = vec![
//!     Word::new("jazz").unwrap(),
//!     Word::new("jars").unwrap(),
//!     Word::new("cats").unwrap(),
//! ];
//!
//! let solver = Solver::new(FrequencyStrategy, &dictionary);
//! let board = Board::parse("____").unwrap();
//! let guess = solver.next_guess(&board, &LetterSet::new()).unwrap();
//! assert_eq!(guess.letter, b'a');
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
