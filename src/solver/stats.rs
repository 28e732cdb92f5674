//! Letter statistics over a candidate set
//!
//! Pure functions of (candidates, used letters). Each one produces a score
//! table whose key domain is exactly the letters appearing in the candidate
//! set minus the letters already used.

use crate::core::{LetterSet, Word};
use rustc_hash::FxHashMap;

/// A per-letter score table under one heuristic
pub type LetterScores = FxHashMap<u8, f64>;

/// Letters appearing in the candidates but not yet used, in ascending order
///
/// The ascending order gives every downstream consumer the same iteration
/// sequence regardless of dictionary order.
#[must_use]
pub fn unused_letters(candidates: &[&Word], used: &LetterSet) -> Vec<u8> {
    let mut seen = [false; 26];
    for word in candidates {
        for &ch in word.chars() {
            seen[(ch - b'a') as usize] = true;
        }
    }

    (b'a'..=b'z')
        .filter(|&ch| seen[(ch - b'a') as usize] && !used.contains(ch))
        .collect()
}

/// Total occurrences of each letter across all candidates, plus the grand
/// total, counting repeats within a word
#[must_use]
pub fn letter_totals(candidates: &[&Word]) -> (FxHashMap<u8, usize>, usize) {
    let mut totals: FxHashMap<u8, usize> = FxHashMap::default();
    let mut letter_count = 0;

    for word in candidates {
        for &ch in word.chars() {
            letter_count += 1;
            *totals.entry(ch).or_insert(0) += 1;
        }
    }

    (totals, letter_count)
}

/// Share of all letter occurrences contributed by each unused letter
///
/// Occurrences of used letters are removed from the denominator, so the
/// values over the remaining letters sum to 1 (up to floating-point error)
/// whenever any unused letter remains.
#[must_use]
pub fn frequency(candidates: &[&Word], used: &LetterSet) -> LetterScores {
    let (totals, mut letter_count) = letter_totals(candidates);

    // Drop used letters' occurrences from the denominator before
    // renormalizing
    for (&ch, &count) in &totals {
        if used.contains(ch) {
            letter_count -= count;
        }
    }

    unused_letters(candidates, used)
        .into_iter()
        .map(|ch| (ch, totals[&ch] as f64 / letter_count as f64))
        .collect()
}

/// Number of distinct candidate words containing each unused letter
///
/// A word counts once even when the letter repeats in it.
#[must_use]
pub fn occurrence(candidates: &[&Word], used: &LetterSet) -> LetterScores {
    unused_letters(candidates, used)
        .into_iter()
        .map(|ch| {
            let count = candidates.iter().filter(|w| w.has_letter(ch)).count();
            (ch, count as f64)
        })
        .collect()
}

/// Number of candidate words NOT containing each unused letter
///
/// For every letter in the key domain, occurrence + absence equals the
/// candidate count.
#[must_use]
pub fn absence(candidates: &[&Word], used: &LetterSet) -> LetterScores {
    let total = candidates.len() as f64;
    occurrence(candidates, used)
        .into_iter()
        .map(|(ch, present)| (ch, total - present))
        .collect()
}

/// Expected repeat count of each unused letter, given it appears at all
///
/// (total occurrences across all words) / (words containing the letter).
///
/// # Panics
/// Panics if a letter in the key domain occurs in zero words. That cannot
/// happen — both numbers come from the same candidate set — so a violation
/// means the statistics themselves are broken.
#[must_use]
pub fn avg_occurrence_in_word(candidates: &[&Word], used: &LetterSet) -> LetterScores {
    let (totals, _) = letter_totals(candidates);

    unused_letters(candidates, used)
        .into_iter()
        .map(|ch| {
            let words_with = candidates.iter().filter(|w| w.has_letter(ch)).count();
            assert!(
                words_with > 0,
                "letter '{}' is in the key domain but occurs in no candidate",
                ch as char
            );
            (ch, totals[&ch] as f64 / words_with as f64)
        })
        .collect()
}

/// Positional spread of each unused letter
///
/// The effective number of board positions the letter occupies — `2^H` of
/// its per-position occurrence histogram, where `H` is Shannon entropy —
/// scaled by the fraction of candidate words containing it. A letter found
/// in more positions, spread more evenly, across more words scores higher.
#[must_use]
pub fn positional_spread(candidates: &[&Word], used: &LetterSet) -> LetterScores {
    let word_count = candidates.len() as f64;

    unused_letters(candidates, used)
        .into_iter()
        .map(|ch| {
            let mut histogram: FxHashMap<usize, usize> = FxHashMap::default();
            let mut words_with = 0;
            for word in candidates {
                let positions = word.positions_of(ch);
                if !positions.is_empty() {
                    words_with += 1;
                }
                for &i in positions {
                    *histogram.entry(i).or_insert(0) += 1;
                }
            }

            let effective_positions = shannon_entropy(&histogram).exp2();
            let coverage = words_with as f64 / word_count;
            (ch, effective_positions * coverage)
        })
        .collect()
}

/// Shannon entropy of a position histogram
///
/// H = -Σ p * log₂(p)
///
/// Zero for a single-position histogram, maximized when the counts are
/// uniform across positions.
fn shannon_entropy(histogram: &FxHashMap<usize, usize>) -> f64 {
    let total = histogram.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    histogram
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
