//! Feedback scoring and representation
//!
//! Feedback holds one verdict per guess position:
//! - Exact = letter in the correct position (green)
//! - Present = letter elsewhere in the answer (yellow)
//! - Absent = letter not in the answer, or all its occurrences already matched (gray)

use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::WORD_LENGTH;
use crate::error::{Error, Result};
use std::fmt;

/// Verdict for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Exact,
    Present,
    Absent,
}

impl Verdict {
    /// Parse a feedback character (g = green, y = yellow, b = black/gray), case-insensitive
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Self::Exact),
            'y' => Some(Self::Present),
            'b' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Channel character for this verdict
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All exact (solved)
    pub const SOLVED: Self = Self([Verdict::Exact; WORD_LENGTH]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// True when every verdict is Exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Exact)
    }

    /// Score `guess` against the true `answer`
    ///
    /// Duplicate letters are handled with two passes:
    /// 1. Mark all exact matches and remove them from the answer's letter pool
    /// 2. Left to right, mark Present while the pool still holds the letter, else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("abide").unwrap();
    /// assert_eq!(Feedback::score(&guess, &answer).to_string(), "bbyby");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut pool: [u8; ALPHABET_SIZE] = answer.letter_counts();

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *verdict = Verdict::Exact;
                pool[letter_index(letter)] -= 1;
            }
        }

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict == Verdict::Exact {
                continue;
            }
            let remaining = &mut pool[letter_index(guess.char_at(i))];
            if *remaining > 0 {
                *verdict = Verdict::Present;
                *remaining -= 1;
            }
        }

        Self(verdicts)
    }

    /// Parse a feedback line such as "gybbb"
    ///
    /// Exactly `WORD_LENGTH` characters from g/y/b, case-insensitive; surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    /// Returns `Error::InvalidFeedback` for any other input.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || Error::InvalidFeedback(trimmed.to_string());

        let parsed: Vec<Verdict> = trimmed
            .chars()
            .map(Verdict::from_char)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        let verdicts: [Verdict; WORD_LENGTH] = parsed.try_into().map_err(|_| invalid())?;
        Ok(Self(verdicts))
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
