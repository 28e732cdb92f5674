//! Results aggregation
//!
//! Reads a per-game results CSV and summarizes it per word length: mean and
//! variance of guesses, correct guesses, and wrong guesses, each normalized
//! per letter of the secret word.

use super::test_all::GameRecord;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// CSV header for aggregate rows
pub const AGGREGATE_HEADER: &str = "wordLength,games,avgGuessesPerLetter,varGuessesPerLetter,\
avgCorrectPerLetter,varCorrectPerLetter,avgWrongPerLetter,varWrongPerLetter";

/// Per-word-length summary
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSummary {
    pub word_length: usize,
    pub games: usize,
    pub avg_guesses_per_letter: f64,
    pub var_guesses_per_letter: f64,
    pub avg_correct_per_letter: f64,
    pub var_correct_per_letter: f64,
    pub avg_wrong_per_letter: f64,
    pub var_wrong_per_letter: f64,
}

/// Full aggregation of a results file
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub entries: usize,
    /// Summaries in ascending word-length order
    pub per_length: Vec<LengthSummary>,
    /// Across all games: averages per letter of word length
    pub overall_guesses_per_letter: f64,
    pub overall_correct_per_letter: f64,
    pub overall_wrong_per_letter: f64,
}

/// Aggregate parsed game records
///
/// Header lines and unparsable lines have already been dropped by
/// `load_records`; empty input yields an empty result rather than an error.
#[must_use]
pub fn aggregate_records(records: &[GameRecord]) -> AggregateResult {
    let mut by_length: BTreeMap<usize, Vec<&GameRecord>> = BTreeMap::new();
    for record in records {
        by_length.entry(record.word_length).or_default().push(record);
    }

    let per_length = by_length
        .into_iter()
        .map(|(word_length, group)| {
            let len = word_length as f64;
            let guesses: Vec<f64> = group.iter().map(|r| r.guess_count as f64 / len).collect();
            let correct: Vec<f64> = group
                .iter()
                .map(|r| r.correct_guess_count as f64 / len)
                .collect();
            let wrong: Vec<f64> = group
                .iter()
                .map(|r| r.incorrect_guess_count as f64 / len)
                .collect();

            let (avg_guesses, var_guesses) = mean_variance(&guesses);
            let (avg_correct, var_correct) = mean_variance(&correct);
            let (avg_wrong, var_wrong) = mean_variance(&wrong);

            LengthSummary {
                word_length,
                games: group.len(),
                avg_guesses_per_letter: avg_guesses,
                var_guesses_per_letter: var_guesses,
                avg_correct_per_letter: avg_correct,
                var_correct_per_letter: var_correct,
                avg_wrong_per_letter: avg_wrong,
                var_wrong_per_letter: var_wrong,
            }
        })
        .collect();

    let entries = records.len();
    let overall = |f: fn(&GameRecord) -> usize| {
        if entries == 0 {
            0.0
        } else {
            records
                .iter()
                .map(|r| f(r) as f64 / r.word_length as f64)
                .sum::<f64>()
                / entries as f64
        }
    };

    AggregateResult {
        entries,
        per_length,
        overall_guesses_per_letter: overall(|r| r.guess_count),
        overall_correct_per_letter: overall(|r| r.correct_guess_count),
        overall_wrong_per_letter: overall(|r| r.incorrect_guess_count),
    }
}

/// Population mean and variance
fn mean_variance(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}

/// Load game records from a results CSV, skipping the header
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_records<P: AsRef<Path>>(path: P) -> io::Result<Vec<GameRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(GameRecord::from_csv).collect())
}

/// Write the per-length summaries as CSV
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_aggregate<P: AsRef<Path>>(path: P, result: &AggregateResult) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    write!(file, "{AGGREGATE_HEADER}")?;

    for row in &result.per_length {
        write!(
            file,
            "\n{},{},{},{},{},{},{},{}",
            row.word_length,
            row.games,
            row.avg_guesses_per_letter,
            row.var_guesses_per_letter,
            row.avg_correct_per_letter,
            row.var_correct_per_letter,
            row.avg_wrong_per_letter,
            row.var_wrong_per_letter
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, guesses: usize, correct: usize, wrong: usize) -> GameRecord {
        GameRecord {
            game_number: 1,
            word: word.to_string(),
            word_length: word.len(),
            guess_count: guesses,
            correct_guess_count: correct,
            incorrect_guess_count: wrong,
            used_letters: String::new(),
        }
    }

    #[test]
    fn groups_by_word_length_ascending() {
        let records = vec![
            record("horse", 6, 4, 2),
            record("cat", 4, 3, 1),
            record("jazz", 3, 3, 0),
            record("dogs", 5, 4, 1),
        ];

        let result = aggregate_records(&records);
        let lengths: Vec<usize> = result.per_length.iter().map(|s| s.word_length).collect();
        assert_eq!(lengths, vec![3, 4, 5]);
        assert_eq!(result.per_length[1].games, 2);
        assert_eq!(result.entries, 4);
    }

    #[test]
    fn per_letter_means_are_normalized() {
        let records = vec![record("jazz", 4, 4, 0)];

        let result = aggregate_records(&records);
        let row = &result.per_length[0];
        assert!((row.avg_guesses_per_letter - 1.0).abs() < 1e-9);
        assert!((row.avg_correct_per_letter - 1.0).abs() < 1e-9);
        assert!((row.avg_wrong_per_letter - 0.0).abs() < 1e-9);
        assert!((row.var_guesses_per_letter - 0.0).abs() < 1e-9);
    }

    #[test]
    fn variance_captures_spread() {
        // Two 4-letter games: 4 and 8 guesses → per-letter 1.0 and 2.0
        let records = vec![record("jazz", 4, 4, 0), record("cats", 8, 4, 4)];

        let result = aggregate_records(&records);
        let row = &result.per_length[0];
        assert!((row.avg_guesses_per_letter - 1.5).abs() < 1e-9);
        assert!((row.var_guesses_per_letter - 0.25).abs() < 1e-9);
    }

    #[test]
    fn overall_averages_cross_lengths() {
        let records = vec![record("cat", 3, 3, 0), record("jazz", 8, 4, 4)];

        let result = aggregate_records(&records);
        // per-letter guesses: 1.0 and 2.0
        assert!((result.overall_guesses_per_letter - 1.5).abs() < 1e-9);
        assert!((result.overall_wrong_per_letter - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = aggregate_records(&[]);
        assert_eq!(result.entries, 0);
        assert!(result.per_length.is_empty());
        assert!((result.overall_guesses_per_letter - 0.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_rows_are_skipped_before_aggregation() {
        let dir = std::env::temp_dir().join("hangman_solver_aggregate_bad_rows");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("records.csv");

        // A zero-length row and a mismatched-length row hide among good ones
        fs::write(
            &path,
            "gameNumber,word,wordLength,guessCount,correctGuessCount,incorrectGuessCount,usedLetters\n\
             1,cat,3,4,3,1,xcat\n\
             2,bad,0,4,3,1,xbad\n\
             3,jazz,3,4,3,1,xjaz\n\
             4,jazz,4,5,3,2,xjaz",
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);

        let result = aggregate_records(&records);
        assert_eq!(result.entries, 2);
        for row in &result.per_length {
            assert!(row.avg_guesses_per_letter.is_finite());
            assert!(row.var_guesses_per_letter.is_finite());
        }
        assert!(result.overall_guesses_per_letter.is_finite());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn aggregate_file_round_trip() {
        let dir = std::env::temp_dir().join("hangman_solver_aggregate");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("agg.csv");

        let records = vec![record("cat", 4, 3, 1), record("jazz", 5, 3, 2)];
        let result = aggregate_records(&records);
        write_aggregate(&path, &result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(AGGREGATE_HEADER));
        assert_eq!(lines.count(), 2);

        fs::remove_file(&path).unwrap();
    }
}
