//! Candidate filtering
//!
//! Narrows a dictionary to the words still consistent with the board and the
//! guess history. The predicate works cell by cell; no textual pattern is
//! built, so unsanitized input cannot change the matching semantics.

use crate::core::{Board, LetterSet, Word};

/// Filter the dictionary down to the words consistent with the evidence
///
/// A word survives iff:
/// - its length equals the board's length,
/// - it has the board's letter at every revealed cell,
/// - it has no used letter at any placeholder cell.
///
/// The third clause only excludes at placeholder cells: a letter that is
/// both revealed on the board and present in `used` does not disqualify the
/// words that carry it at its revealed positions.
///
/// Deterministic and side-effect free; survivors keep dictionary order.
/// An empty result is a value, not an error.
#[must_use]
pub fn filter_candidates<'a>(
    dictionary: &'a [Word],
    board: &Board,
    used: &LetterSet,
) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|word| matches(word, board, used))
        .collect()
}

/// The matching predicate for a single word
#[must_use]
pub fn matches(word: &Word, board: &Board, used: &LetterSet) -> bool {
    if word.len() != board.len() {
        return false;
    }

    word.chars()
        .iter()
        .zip(board.cells())
        .all(|(&ch, cell)| match cell {
            Some(revealed) => ch == revealed,
            None => !used.contains(ch),
        })
}
