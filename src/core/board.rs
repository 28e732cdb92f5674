//! Hangman board state
//!
//! The board is the public view of the secret word: a fixed-length row of
//! cells, each either a revealed letter or a placeholder. Its length is set
//! at creation and never changes during a game.

use super::word::Word;
use std::fmt;

/// Display character for an unrevealed cell
pub const PLACEHOLDER: char = '_';

/// A fixed-length sequence of revealed/unrevealed cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<u8>>,
}

/// Error type for unparsable board strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    InvalidCell(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must contain at least one cell"),
            Self::InvalidCell(c) => {
                write!(f, "Board cell must be a letter or '{PLACEHOLDER}', got '{c}'")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a fully hidden board for a secret of the given length
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Parse a board from its display form, e.g. `"j__z"`
    ///
    /// Letters are revealed cells (normalized to lowercase), `_` is a
    /// placeholder.
    ///
    /// # Errors
    /// Returns `BoardError` if the string is empty or contains anything
    /// besides ASCII letters and placeholders.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        if text.is_empty() {
            return Err(BoardError::Empty);
        }

        let cells = text
            .chars()
            .map(|c| match c {
                PLACEHOLDER => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                c => Err(BoardError::InvalidCell(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cells })
    }

    /// Number of cells; equals the secret word's length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `position`: `Some(letter)` if revealed
    #[inline]
    #[must_use]
    pub fn cell(&self, position: usize) -> Option<u8> {
        self.cells[position]
    }

    /// Iterate over cells in board order
    pub fn cells(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.cells.iter().copied()
    }

    /// True when no placeholder remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of still-hidden cells
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Reveal `letter` at every position where `secret` has it
    ///
    /// Returns true if at least one cell was revealed. The board length must
    /// match the secret's length; the game state machine guarantees this.
    pub fn reveal(&mut self, secret: &Word, letter: u8) -> bool {
        let positions = secret.positions_of(letter);
        for &i in positions {
            self.cells[i] = Some(letter);
        }
        !positions.is_empty()
    }

    /// Reveal the whole board from the secret word
    pub fn reveal_all(&mut self, secret: &Word) {
        for (cell, &ch) in self.cells.iter_mut().zip(secret.chars()) {
            *cell = Some(ch);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(ch) => write!(f, "{}", *ch as char)?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_board_is_all_placeholders() {
        let board = Board::hidden(4);
        assert_eq!(board.len(), 4);
        assert_eq!(board.to_string(), "____");
        assert!(!board.is_complete());
        assert_eq!(board.unknown_count(), 4);
    }

    #[test]
    fn parse_round_trips() {
        let board = Board::parse("j__z").unwrap();
        assert_eq!(board.to_string(), "j__z");
        assert_eq!(board.cell(0), Some(b'j'));
        assert_eq!(board.cell(1), None);
        assert_eq!(board.cell(3), Some(b'z'));
    }

    #[test]
    fn parse_normalizes_case() {
        let board = Board::parse("J__Z").unwrap();
        assert_eq!(board.to_string(), "j__z");
    }

    #[test]
    fn parse_rejects_bad_cells() {
        assert!(matches!(Board::parse(""), Err(BoardError::Empty)));
        assert!(matches!(
            Board::parse("a_3_"),
            Err(BoardError::InvalidCell('3'))
        ));
        assert!(Board::parse("a b").is_err());
    }

    #[test]
    fn reveal_marks_every_matching_position() {
        let secret = Word::new("jazz").unwrap();
        let mut board = Board::hidden(4);

        assert!(board.reveal(&secret, b'z'));
        assert_eq!(board.to_string(), "__zz");
        assert_eq!(board.unknown_count(), 2);
    }

    #[test]
    fn reveal_misses_return_false() {
        let secret = Word::new("jazz").unwrap();
        let mut board = Board::hidden(4);

        assert!(!board.reveal(&secret, b'q'));
        assert_eq!(board.to_string(), "____");
    }

    #[test]
    fn reveal_all_completes_board() {
        let secret = Word::new("cats").unwrap();
        let mut board = Board::hidden(4);

        board.reveal_all(&secret);
        assert_eq!(board.to_string(), "cats");
        assert!(board.is_complete());
    }

    #[test]
    fn complete_after_last_letter() {
        let secret = Word::new("jazz").unwrap();
        let mut board = Board::hidden(4);

        board.reveal(&secret, b'j');
        board.reveal(&secret, b'a');
        assert!(!board.is_complete());
        board.reveal(&secret, b'z');
        assert!(board.is_complete());
    }
}
