//! Board ranking command
//!
//! Inspects one board position: candidate count, the per-letter score table
//! under a heuristic, and the recommended guess.

use crate::core::{Board, LetterSet};
use crate::solver::{Guess, Solver, Strategy};

/// Result of ranking a board position
pub struct RankResult {
    pub board: String,
    pub used_letters: String,
    pub heuristic: String,
    pub candidate_count: usize,
    /// (letter, score), best first; equal scores ordered alphabetically
    pub scores: Vec<(char, f64)>,
    pub recommendation: Guess,
}

/// Score all remaining letters for a board position
///
/// # Errors
///
/// Returns an error if the board string is unparsable, the used letters
/// contain non-letters, or no dictionary word is consistent with the
/// evidence.
pub fn rank_board<S: Strategy>(
    board_text: &str,
    used_text: &str,
    solver: &Solver<S>,
) -> Result<RankResult, String> {
    let board = Board::parse(board_text).map_err(|e| format!("Invalid board: {e}"))?;

    if !used_text.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("Invalid used letters: '{used_text}'"));
    }
    let used: LetterSet = used_text.chars().collect();

    let candidates = solver.candidates(&board, &used);
    let recommendation = solver
        .next_guess(&board, &used)
        .map_err(|e| e.to_string())?;

    let table = solver.strategy().score_letters(&candidates, &used);
    let mut scores: Vec<(char, f64)> = table
        .into_iter()
        .map(|(ch, score)| (ch as char, score))
        .collect();
    scores.sort_by(|(ch_a, score_a), (ch_b, score_b)| {
        score_b.total_cmp(score_a).then(ch_a.cmp(ch_b))
    });

    Ok(RankResult {
        board: board.to_string(),
        used_letters: used.to_string(),
        heuristic: solver.strategy().name().to_string(),
        candidate_count: candidates.len(),
        scores,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["jazz", "jars", "cats"])
    }

    #[test]
    fn ranks_open_board() {
        let dict = dictionary();
        let solver = Solver::new(FrequencyStrategy, &dict);

        let result = rank_board("____", "", &solver).unwrap();
        assert_eq!(result.candidate_count, 3);
        assert_eq!(result.heuristic, "frequency");
        // Best-first: 'a' leads the table and the recommendation
        assert_eq!(result.scores[0].0, 'a');
        assert_eq!(result.recommendation.letter, b'a');
    }

    #[test]
    fn scores_are_sorted_best_first() {
        let dict = dictionary();
        let solver = Solver::new(FrequencyStrategy, &dict);

        let result = rank_board("____", "", &solver).unwrap();
        for pair in result.scores.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn invalid_board_is_an_error() {
        let dict = dictionary();
        let solver = Solver::new(FrequencyStrategy, &dict);

        assert!(rank_board("a_3", "", &solver).is_err());
        assert!(rank_board("____", "a1", &solver).is_err());
    }

    #[test]
    fn contradictory_evidence_is_an_error() {
        let dict = dictionary();
        let solver = Solver::new(FrequencyStrategy, &dict);

        assert!(rank_board("q___", "", &solver).is_err());
    }
}
