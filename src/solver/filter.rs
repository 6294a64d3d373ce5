//! Candidate selection under a constraint set
//!
//! Selection is purely order-based: the first admitted word in list order wins, so
//! the same list and the same constraints always produce the same guess.

use super::constraints::ConstraintSet;
use crate::core::Word;

/// First word in `words` admitted by `constraints`, or `None` when none remain
///
/// # Examples
/// ```
/// use wordle_sieve::solver::{ConstraintSet, next_candidate};
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// let constraints = ConstraintSet::default();
/// assert_eq!(next_candidate(&words, &constraints).unwrap().text(), "crane");
/// ```
#[must_use]
pub fn next_candidate<'a>(words: &'a [Word], constraints: &ConstraintSet) -> Option<&'a Word> {
    words.iter().find(|word| constraints.admits(word))
}

/// All admitted words, in list order
pub fn candidates<'a>(
    words: &'a [Word],
    constraints: &ConstraintSet,
) -> impl Iterator<Item = &'a Word> {
    words.iter().filter(move |word| constraints.admits(word))
}

/// Number of admitted words
#[must_use]
pub fn count_candidates(words: &[Word], constraints: &ConstraintSet) -> usize {
    candidates(words, constraints).count()
}
