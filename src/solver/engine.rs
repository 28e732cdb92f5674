//! Main Hangman solver interface

use super::filter::filter_candidates;
use super::strategy::Strategy;
use crate::core::{Board, LetterSet, Word};
use std::fmt;

/// The solver's recommendation for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    /// Best unguessed letter under the heuristic
    pub letter: u8,
    /// The remaining word, when exactly one candidate is left — the engine
    /// may guess it outright instead of the letter
    pub word: Option<Word>,
}

/// Error type for unguessable positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No dictionary word is consistent with the guess history. The session
    /// is unrecoverable: either the evidence is contradictory or the secret
    /// word is missing from the dictionary.
    NoCandidates,
    /// Candidates remain but every letter they contain has been used.
    /// Distinct from `NoCandidates`; can only arise on an already-complete
    /// board.
    NoLettersLeft,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => {
                write!(f, "no dictionary word is consistent with the guesses so far")
            }
            Self::NoLettersLeft => write!(f, "no unguessed letters remain in the candidates"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Main Hangman solver
///
/// Coordinates the per-turn cycle — filter the dictionary, score the
/// remaining letters, pick the best guess — using a given heuristic.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over an immutable dictionary
    pub const fn new(strategy: S, dictionary: &'a [Word]) -> Self {
        Self {
            strategy,
            dictionary,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Recommend the next guess for the observed board and guess history
    ///
    /// Ties between equally scored letters resolve to the alphabetically
    /// first letter, so the recommendation is stable across dictionary
    /// reorderings.
    ///
    /// # Errors
    /// - `SolveError::NoCandidates` when no word survives filtering;
    ///   callers should treat this as fatal for the session.
    /// - `SolveError::NoLettersLeft` when candidates survive but carry no
    ///   unguessed letter.
    pub fn next_guess(&self, board: &Board, used: &LetterSet) -> Result<Guess, SolveError> {
        let candidates = filter_candidates(self.dictionary, board, used);

        if candidates.is_empty() {
            return Err(SolveError::NoCandidates);
        }

        let scores = self.strategy.score_letters(&candidates, used);

        // Scan letters in ascending order, replacing the incumbent only on
        // a strictly greater score: alphabetical tie-break
        let mut keys: Vec<u8> = scores.keys().copied().collect();
        keys.sort_unstable();

        let mut best: Option<(u8, f64)> = None;
        for ch in keys {
            let score = scores[&ch];
            match best {
                Some((_, incumbent)) if score <= incumbent => {}
                _ => best = Some((ch, score)),
            }
        }

        let (letter, _) = best.ok_or(SolveError::NoLettersLeft)?;

        let word = if candidates.len() == 1 {
            Some(candidates[0].clone())
        } else {
            None
        };

        Ok(Guess { letter, word })
    }

    /// Words still consistent with the evidence, in dictionary order
    #[must_use]
    pub fn candidates(&self, board: &Board, used: &LetterSet) -> Vec<&'a Word> {
        filter_candidates(self.dictionary, board, used)
    }

    /// How many candidates remain
    #[must_use]
    pub fn count_candidates(&self, board: &Board, used: &LetterSet) -> usize {
        self.candidates(board, used).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{FrequencyStrategy, OccurrenceStrategy, StrategyType};

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn picks_highest_frequency_letter() {
        let dict = dictionary(&["jazz", "jars", "cats"]);
        let solver = Solver::new(FrequencyStrategy, &dict);
        let board = Board::parse("____").unwrap();
        let used = LetterSet::new();

        let guess = solver.next_guess(&board, &used).unwrap();
        // 'a' appears in every candidate and has the most occurrences
        assert_eq!(guess.letter, b'a');
        assert_eq!(guess.word, None);
    }

    #[test]
    fn single_candidate_returns_the_word() {
        let dict = dictionary(&["jazz", "jars", "cats"]);
        let solver = Solver::new(FrequencyStrategy, &dict);
        let board = Board::parse("ja__").unwrap();
        let used: LetterSet = "jar".chars().collect();

        let guess = solver.next_guess(&board, &used).unwrap();
        assert_eq!(guess.word, Some(Word::new("jazz").unwrap()));
    }

    #[test]
    fn empty_candidates_is_a_distinct_error() {
        let dict = dictionary(&["jazz", "jars"]);
        let solver = Solver::new(FrequencyStrategy, &dict);
        let board = Board::parse("q___").unwrap();
        let used = LetterSet::new();

        assert_eq!(
            solver.next_guess(&board, &used),
            Err(SolveError::NoCandidates)
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        // Two candidates, fully symmetric: every letter occurs once across
        // the set, so all scores tie and 'a' must win
        let dict = dictionary(&["ab", "cd"]);
        let solver = Solver::new(OccurrenceStrategy, &dict);
        let board = Board::parse("__").unwrap();
        let used = LetterSet::new();

        let guess = solver.next_guess(&board, &used).unwrap();
        assert_eq!(guess.letter, b'a');
    }

    #[test]
    fn tie_break_survives_dictionary_reordering() {
        let board = Board::parse("__").unwrap();
        let used = LetterSet::new();

        let forward = dictionary(&["ab", "cd", "ef"]);
        let backward = dictionary(&["ef", "cd", "ab"]);

        let first = Solver::new(OccurrenceStrategy, &forward)
            .next_guess(&board, &used)
            .unwrap();
        let second = Solver::new(OccurrenceStrategy, &backward)
            .next_guess(&board, &used)
            .unwrap();

        assert_eq!(first.letter, second.letter);
    }

    #[test]
    fn works_through_enum_dispatch() {
        let dict = dictionary(&["jazz", "jars", "cats"]);
        let solver = Solver::new(StrategyType::from_name("occurrence"), &dict);
        let board = Board::parse("____").unwrap();
        let used = LetterSet::new();

        let guess = solver.next_guess(&board, &used).unwrap();
        assert_eq!(guess.letter, b'a');
    }

    #[test]
    fn candidate_count_shrinks_with_evidence() {
        let dict = dictionary(&["jazz", "jars", "jaws", "cats"]);
        let solver = Solver::new(FrequencyStrategy, &dict);
        let board = Board::parse("____").unwrap();

        let mut used = LetterSet::new();
        assert_eq!(solver.count_candidates(&board, &used), 4);

        used.push(b'c');
        assert_eq!(solver.count_candidates(&board, &used), 3);

        let board = Board::parse("ja__").unwrap();
        used.push(b'j');
        used.push(b'a');
        assert!(solver.count_candidates(&board, &used) <= 3);
    }
}
