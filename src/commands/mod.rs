//! Command implementations

pub mod aggregate;
pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use aggregate::{AggregateResult, aggregate_records, load_records, write_aggregate};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use rank::{RankResult, rank_board};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{GameRecord, last_game_number, run_games, write_records};
