//! Ranking command
//!
//! Lists the highest-scoring words under the letter-position frequency table.

use crate::core::Word;
use crate::solver::rank_with_scores;

/// The `n` best-ranked words with their scores, highest first
#[must_use]
pub fn top_ranked(words: &[Word], n: usize) -> Vec<(Word, f64)> {
    let mut scored = rank_with_scores(words);
    scored.truncate(n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn returns_at_most_n() {
        let words = words_from_slice(&["zzzzz", "crane", "crate", "grate", "irate"]);

        assert_eq!(top_ranked(&words, 2).len(), 2);
        assert_eq!(top_ranked(&words, 50).len(), words.len());
        assert!(top_ranked(&words, 0).is_empty());
    }

    #[test]
    fn best_word_first() {
        let words = words_from_slice(&["zzzzz", "crane", "crate", "grate", "irate"]);
        let top = top_ranked(&words, 1);
        assert_eq!(top[0].0.text(), "crate");
    }
}
