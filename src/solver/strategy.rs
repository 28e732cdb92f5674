//! Letter-scoring heuristics
//!
//! Defines the Strategy trait and concrete implementations.

use super::stats::{self, LetterScores};
use crate::core::{LetterSet, Word};

/// A heuristic for scoring unguessed letters from candidate statistics
pub trait Strategy {
    /// Score every letter appearing in the candidates but not yet used
    ///
    /// The returned table's key domain is exactly that set of letters.
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores;

    /// Heuristic name for logs and result records
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all heuristic types
///
/// Allows runtime selection of a heuristic while maintaining static
/// dispatch. One fixed case per heuristic, defaulting explicitly — no
/// string fallthrough in the hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Share of remaining letter occurrences (default)
    Frequency(FrequencyStrategy),
    /// Distinct words containing the letter
    Occurrence(OccurrenceStrategy),
    /// Words the letter is absent from
    Absence(AbsenceStrategy),
    /// Expected repeats given the letter appears
    AvgOccurrenceInWord(AvgOccurrenceStrategy),
    /// Positional spread across board cells
    PositionsInWord(PositionalSpreadStrategy),
}

impl Strategy for StrategyType {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        match self {
            Self::Frequency(s) => s.score_letters(candidates, used),
            Self::Occurrence(s) => s.score_letters(candidates, used),
            Self::Absence(s) => s.score_letters(candidates, used),
            Self::AvgOccurrenceInWord(s) => s.score_letters(candidates, used),
            Self::PositionsInWord(s) => s.score_letters(candidates, used),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Frequency(s) => s.name(),
            Self::Occurrence(s) => s.name(),
            Self::Absence(s) => s.name(),
            Self::AvgOccurrenceInWord(s) => s.name(),
            Self::PositionsInWord(s) => s.name(),
        }
    }
}

impl StrategyType {
    /// Create a heuristic from its name
    ///
    /// Supported names: "frequency", "occurrence", "absence",
    /// "avgOccurrenceInWord" (alias "avg-occurrence"), "positionsInWord"
    /// (alias "positions"). An unrecognized name falls back to frequency
    /// with a diagnostic on stderr; it never aborts the session.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyStrategy),
            "occurrence" => Self::Occurrence(OccurrenceStrategy),
            "absence" => Self::Absence(AbsenceStrategy),
            "avgOccurrenceInWord" | "avg-occurrence" => {
                Self::AvgOccurrenceInWord(AvgOccurrenceStrategy)
            }
            "positionsInWord" | "positions" => Self::PositionsInWord(PositionalSpreadStrategy),
            other => {
                eprintln!("unknown heuristic '{other}', falling back to frequency");
                Self::Frequency(FrequencyStrategy)
            }
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Letter-frequency heuristic
///
/// Scores each letter by its share of all remaining letter occurrences
/// across the candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        stats::frequency(candidates, used)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

/// Word-occurrence heuristic
///
/// Scores each letter by how many distinct candidate words contain it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccurrenceStrategy;

impl Strategy for OccurrenceStrategy {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        stats::occurrence(candidates, used)
    }

    fn name(&self) -> &'static str {
        "occurrence"
    }
}

/// Absence heuristic
///
/// Scores each letter by how many candidate words do NOT contain it; a hit
/// on such a letter eliminates many candidates at once when it misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsenceStrategy;

impl Strategy for AbsenceStrategy {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        stats::absence(candidates, used)
    }

    fn name(&self) -> &'static str {
        "absence"
    }
}

/// Average-occurrence heuristic
///
/// Scores each letter by its expected repeat count given it appears at all,
/// favoring letters that reveal several cells per correct guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvgOccurrenceStrategy;

impl Strategy for AvgOccurrenceStrategy {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        stats::avg_occurrence_in_word(candidates, used)
    }

    fn name(&self) -> &'static str {
        "avgOccurrenceInWord"
    }
}

/// Positional-spread heuristic
///
/// Scores each letter by the effective number of board positions it
/// occupies across the candidates, weighted by word coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalSpreadStrategy;

impl Strategy for PositionalSpreadStrategy {
    fn score_letters(&self, candidates: &[&Word], used: &LetterSet) -> LetterScores {
        stats::positional_spread(candidates, used)
    }

    fn name(&self) -> &'static str {
        "positionsInWord"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Vec<Word>, LetterSet) {
        let words = ["jazz", "jars", "cats"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        (words, LetterSet::new())
    }

    #[test]
    fn from_name_resolves_every_heuristic() {
        assert_eq!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(FrequencyStrategy)
        );
        assert_eq!(
            StrategyType::from_name("occurrence"),
            StrategyType::Occurrence(OccurrenceStrategy)
        );
        assert_eq!(
            StrategyType::from_name("absence"),
            StrategyType::Absence(AbsenceStrategy)
        );
        assert_eq!(
            StrategyType::from_name("avgOccurrenceInWord"),
            StrategyType::AvgOccurrenceInWord(AvgOccurrenceStrategy)
        );
        assert_eq!(
            StrategyType::from_name("positionsInWord"),
            StrategyType::PositionsInWord(PositionalSpreadStrategy)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_frequency() {
        let strategy = StrategyType::from_name("entropy");
        assert_eq!(strategy, StrategyType::Frequency(FrequencyStrategy));
        assert_eq!(strategy.name(), "frequency");
    }

    #[test]
    fn every_strategy_scores_the_same_key_domain() {
        let (words, used) = setup();
        let candidates: Vec<&Word> = words.iter().collect();

        let expected: Vec<u8> = {
            let mut keys: Vec<u8> = FrequencyStrategy
                .score_letters(&candidates, &used)
                .keys()
                .copied()
                .collect();
            keys.sort_unstable();
            keys
        };

        for strategy in [
            StrategyType::from_name("occurrence"),
            StrategyType::from_name("absence"),
            StrategyType::from_name("avgOccurrenceInWord"),
            StrategyType::from_name("positionsInWord"),
        ] {
            let mut keys: Vec<u8> = strategy
                .score_letters(&candidates, &used)
                .keys()
                .copied()
                .collect();
            keys.sort_unstable();
            assert_eq!(keys, expected, "key domain differs for {}", strategy.name());
        }
    }

    #[test]
    fn dispatch_matches_direct_call() {
        let (words, used) = setup();
        let candidates: Vec<&Word> = words.iter().collect();

        let direct = FrequencyStrategy.score_letters(&candidates, &used);
        let dispatched = StrategyType::default().score_letters(&candidates, &used);
        assert_eq!(direct.len(), dispatched.len());
        for (ch, score) in direct {
            assert!((dispatched[&ch] - score).abs() < 1e-12);
        }
    }
}
