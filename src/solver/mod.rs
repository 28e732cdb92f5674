//! Hangman solving engine
//!
//! Candidate filtering, letter statistics, and heuristic guess selection.

mod engine;
pub mod filter;
pub mod stats;
pub mod strategy;

pub use engine::{Guess, SolveError, Solver};
pub use strategy::{
    AbsenceStrategy, AvgOccurrenceStrategy, FrequencyStrategy, OccurrenceStrategy,
    PositionalSpreadStrategy, Strategy, StrategyType,
};
