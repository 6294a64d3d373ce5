//! Letter-position frequency ranking
//!
//! Produces an alternative candidate order: words built from letters that are
//! common at their positions come first. Earlier list entries weigh more, on the
//! assumption that the source list is sorted by word frequency.

use crate::WORD_LENGTH;
use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Weighted letter counts, indexed by `[position][letter_index]`
pub type FrequencyTable = [[f64; ALPHABET_SIZE]; WORD_LENGTH];

/// Accumulate weighted letter frequencies per position
///
/// The word at index `i` of `n` contributes `1 - i / n`.
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FrequencyTable {
    let mut table = [[0.0; ALPHABET_SIZE]; WORD_LENGTH];
    let total = words.len() as f64;

    for (i, word) in words.iter().enumerate() {
        let weight = 1.0 - i as f64 / total;
        for (position, &letter) in word.chars().iter().enumerate() {
            table[position][letter_index(letter)] += weight;
        }
    }

    table
}

/// Score of `word`: the sum of its letters' frequencies at their positions
#[must_use]
pub fn word_score(table: &FrequencyTable, word: &Word) -> f64 {
    word.chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table[position][letter_index(letter)])
        .sum()
}

/// Words paired with their scores, highest first
///
/// The sort is stable, so tied words keep their input order.
#[must_use]
pub fn rank_with_scores(words: &[Word]) -> Vec<(Word, f64)> {
    let table = letter_frequencies(words);
    let mut scored: Vec<(Word, f64)> = words
        .iter()
        .map(|&word| (word, word_score(&table, &word)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored
}

/// Reorder a copy of `words` by descending frequency score
///
/// The result is a permutation of the input; the input is left untouched.
///
/// # Examples
/// ```
/// use wordle_sieve::solver::rank;
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["zzzzz", "crane", "crate", "grate"]);
/// let ranked = rank(&words);
/// assert_eq!(ranked.len(), words.len());
/// assert_eq!(ranked.last().unwrap().text(), "zzzzz");
/// ```
#[must_use]
pub fn rank(words: &[Word]) -> Vec<Word> {
    rank_with_scores(words)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}
