//! Guessed-letter history
//!
//! Tracks every letter guessed so far, in guess order. Repeated guesses are
//! appended as-is so logs and CSV rows reproduce the full history; membership
//! queries treat the collection as a set. The history only ever grows.

use std::fmt;

/// Insertion-ordered record of guessed letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<u8>,
}

impl LetterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess, repeats included
    pub fn push(&mut self, letter: u8) {
        self.letters.push(letter);
    }

    /// Set-membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Total guesses recorded, counting repeats
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Guessed letters in guess order
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        iter.into_iter()
            .map(|c| c.to_ascii_lowercase() as u8)
            .collect()
    }
}
