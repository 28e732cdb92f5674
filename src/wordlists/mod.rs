//! Word lists for Hangman solving
//!
//! Provides the embedded default dictionary compiled into the binary plus a
//! file loader for custom dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
