//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded
//! default.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Lines are trimmed and lowercase-normalized; lines that are empty or not
/// purely alphabetic are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Callers treat
/// this as fatal at startup.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionaries/words_alpha.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["jazz", "jars", "cats"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "jazz");
        assert_eq!(words[1].text(), "jars");
        assert_eq!(words[2].text(), "cats");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["jazz", "c4ts", "", "two words", "dogs"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "jazz");
        assert_eq!(words[1].text(), "dogs");
    }

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["JAZZ"]);
        assert_eq!(words[0].text(), "jazz");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("/nonexistent/dictionary.txt").is_err());
    }
}
