//! Accumulated knowledge about the answer
//!
//! Per position, the set of letters still possible there. Per letter, the minimum
//! number of times it is known to occur.

use crate::WORD_LENGTH;
use crate::core::{ALPHABET_SIZE, Feedback, Verdict, Word, letter_index};
use log::trace;
use std::fmt;

/// Set of lowercase letters stored as a 26-bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const ALL: Self = Self((1 << ALPHABET_SIZE) - 1);

    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&c| self.contains(c))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters().map(char::from).collect();
        write!(f, "{{{letters}}}")
    }
}

/// How minimum letter counts evolve between rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Counts reflect only the latest round's feedback
    #[default]
    PerRound,
    /// Counts keep the highest value seen in any round
    Accumulate,
}

/// Everything known about the answer so far
///
/// Starts fully open: every letter allowed everywhere, no required letters.
/// Allowed sets only shrink as truthful feedback is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintSet {
    allowed: [LetterSet; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    policy: CountPolicy,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self::new(CountPolicy::default())
    }
}

impl ConstraintSet {
    #[must_use]
    pub const fn new(policy: CountPolicy) -> Self {
        Self {
            allowed: [LetterSet::ALL; WORD_LENGTH],
            min_counts: [0; ALPHABET_SIZE],
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> CountPolicy {
        self.policy
    }

    /// Letters still possible at `position`
    #[must_use]
    pub const fn allowed_at(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }

    /// Minimum known occurrences of `letter` in the answer
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[letter_index(letter)]
    }

    /// Apply one round of feedback for `guess`
    ///
    /// Positions are processed left to right:
    /// - Exact collapses the position to the guessed letter
    /// - Present removes the letter from that position only
    /// - Absent removes the letter everywhere, unless the same letter already
    ///   appeared earlier in the guess, in which case only from that position
    ///
    /// Exact and Present both count towards the letter's minimum occurrences.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    /// use wordle_sieve::solver::ConstraintSet;
    ///
    /// let mut constraints = ConstraintSet::default();
    /// let guess = Word::new("crane").unwrap();
    /// constraints.update(&guess, &Feedback::parse("gbbbb").unwrap());
    ///
    /// assert!(constraints.admits(&Word::new("cloud").unwrap()));
    /// assert!(!constraints.admits(&Word::new("clear").unwrap()));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        let mut round_counts = [0u8; ALPHABET_SIZE];

        for (i, &verdict) in feedback.verdicts().iter().enumerate() {
            let letter = guess.char_at(i);
            match verdict {
                Verdict::Exact => {
                    self.allowed[i] = LetterSet::single(letter);
                    round_counts[letter_index(letter)] += 1;
                }
                Verdict::Present => {
                    self.allowed[i].remove(letter);
                    round_counts[letter_index(letter)] += 1;
                }
                Verdict::Absent if is_repeat(guess, i) => self.allowed[i].remove(letter),
                Verdict::Absent => {
                    for set in &mut self.allowed {
                        set.remove(letter);
                    }
                }
            }
        }

        match self.policy {
            CountPolicy::PerRound => self.min_counts = round_counts,
            CountPolicy::Accumulate => {
                for (current, seen) in self.min_counts.iter_mut().zip(round_counts) {
                    *current = (*current).max(seen);
                }
            }
        }

        trace!("constraints after {guess} {feedback}: {self:?}");
    }

    /// Whether `word` satisfies every positional and count constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let positions_ok = word
            .chars()
            .iter()
            .zip(&self.allowed)
            .all(|(&letter, set)| set.contains(letter));

        positions_ok && self.counts_satisfied(word)
    }

    fn counts_satisfied(&self, word: &Word) -> bool {
        let counts = word.letter_counts();
        self.min_counts
            .iter()
            .zip(counts)
            .all(|(&required, have)| have >= required)
    }
}

/// True when the letter at `position` also occurs earlier in `guess`
fn is_repeat(guess: &Word, position: usize) -> bool {
    let letter = guess.char_at(position);
    guess.chars()[..position].contains(&letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn apply(constraints: &mut ConstraintSet, guess: &str, feedback: &str) {
        constraints.update(&word(guess), &Feedback::parse(feedback).unwrap());
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::ALL;
        assert_eq!(set.letters().count(), 26);
        set.remove(b'q');
        assert!(!set.contains(b'q'));
        assert!(set.contains(b'z'));
        assert_eq!(LetterSet::single(b'c').letters().collect::<Vec<_>>(), [b'c']);
        assert_eq!(format!("{:?}", LetterSet::single(b'x')), "{x}");
    }

    #[test]
    fn fresh_constraints_admit_everything() {
        let constraints = ConstraintSet::default();
        assert!(constraints.admits(&word("zzzzz")));
        assert!(constraints.admits(&word("crane")));
        assert_eq!(constraints.min_count(b'a'), 0);
    }

    #[test]
    fn exact_pins_position() {
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "crane", "bbgbb");

        assert_eq!(constraints.allowed_at(2), LetterSet::single(b'a'));
        assert_eq!(constraints.min_count(b'a'), 1);
        assert!(constraints.admits(&word("plaid")));
        assert!(!constraints.admits(&word("ploys")));
    }

    #[test]
    fn present_excludes_position_but_requires_letter() {
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "crane", "ybbbb");

        assert!(!constraints.allowed_at(0).contains(b'c'));
        assert!(constraints.allowed_at(1).contains(b'c'));
        // No C at all
        assert!(!constraints.admits(&word("dolly")));
        // C in the excluded position
        assert!(!constraints.admits(&word("codly")));
        assert!(constraints.admits(&word("duchy")));
    }

    #[test]
    fn absent_removes_letter_everywhere() {
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "crane", "bbbbb");

        for position in 0..WORD_LENGTH {
            assert!(!constraints.allowed_at(position).contains(b'e'));
        }
        assert!(!constraints.admits(&word("moved")));
        assert!(constraints.admits(&word("moody")));
    }

    #[test]
    fn absent_repeat_only_removes_its_position() {
        // speed vs abide: first E present, second E absent
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "speed", "bbyby");

        assert!(!constraints.allowed_at(2).contains(b'e'));
        assert!(!constraints.allowed_at(3).contains(b'e'));
        assert!(constraints.allowed_at(4).contains(b'e'));
        assert!(constraints.admits(&word("abide")));
    }

    #[test]
    fn absent_first_occurrence_then_exact_keeps_exact() {
        // eerie vs abode: only the last E is in the answer
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "eerie", "bbbbg");

        assert_eq!(constraints.allowed_at(4), LetterSet::single(b'e'));
        assert!(!constraints.allowed_at(0).contains(b'e'));
        assert!(constraints.admits(&word("abode")));
    }

    #[test]
    fn min_counts_require_duplicates() {
        let mut constraints = ConstraintSet::default();
        apply(&mut constraints, "geese", "bygbb");

        assert_eq!(constraints.min_count(b'e'), 2);
        assert!(constraints.admits(&word("creep")));
        assert!(!constraints.admits(&word("bread")));
    }

    #[test]
    fn per_round_policy_resets_counts() {
        let mut constraints = ConstraintSet::new(CountPolicy::PerRound);
        apply(&mut constraints, "crane", "ybbbb");
        assert_eq!(constraints.min_count(b'c'), 1);

        apply(&mut constraints, "moldy", "bbbbb");
        assert_eq!(constraints.min_count(b'c'), 0);
        assert!(constraints.admits(&word("tufts")));
    }

    #[test]
    fn accumulate_policy_keeps_maximum() {
        let mut constraints = ConstraintSet::new(CountPolicy::Accumulate);
        apply(&mut constraints, "crane", "ybbbb");
        apply(&mut constraints, "moldy", "bbbbb");

        assert_eq!(constraints.min_count(b'c'), 1);
        assert!(!constraints.admits(&word("tufts")));
    }
}
