//! Guess / feedback loop
//!
//! A [`Session`] owns one [`ConstraintSet`] and walks the state machine
//! `Guessing -> AwaitingFeedback -> Guessing | Solved`, ending in `Exhausted` when the
//! filter finds no candidate.

use super::constraints::{ConstraintSet, CountPolicy};
use super::filter::{count_candidates, next_candidate};
use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use log::{Level, debug, log_enabled};

/// Supplies feedback for each guess
///
/// Interactive front ends ask a human; simulations score against a known answer.
pub trait FeedbackSource {
    /// Feedback for `guess`, the `round`-th guess of the session (1-based)
    ///
    /// # Errors
    /// Any error aborts the session it was raised in.
    fn feedback(&mut self, round: usize, guess: &Word) -> Result<Feedback>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(usize, &Word) -> Result<Feedback>,
{
    fn feedback(&mut self, round: usize, guess: &Word) -> Result<Feedback> {
        self(round, guess)
    }
}

/// Feedback computed against a known answer
#[derive(Debug, Clone, Copy)]
pub struct Oracle {
    answer: Word,
}

impl Oracle {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for Oracle {
    fn feedback(&mut self, _round: usize, guess: &Word) -> Result<Feedback> {
        Ok(Feedback::score(guess, &self.answer))
    }
}

/// Session limits and constraint behaviour
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Stop after this many guesses; `None` runs until solved or exhausted
    pub max_rounds: Option<usize>,
    pub count_policy: CountPolicy,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Guessing,
    AwaitingFeedback(Word),
    Solved,
    Exhausted,
    OutOfRounds,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::OutOfRounds)
    }
}

/// How a finished session ended; `rounds` is the number of guesses produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { rounds: usize },
    Exhausted { rounds: usize },
    OutOfRounds { rounds: usize },
}

impl Outcome {
    #[must_use]
    pub const fn rounds(&self) -> usize {
        match *self {
            Self::Solved { rounds } | Self::Exhausted { rounds } | Self::OutOfRounds { rounds } => {
                rounds
            }
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One completed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub guess: Word,
    pub feedback: Feedback,
    constraints_before: ConstraintSet,
    constraints_after: ConstraintSet,
}

impl Round {
    /// Words in `words` admitted before this round's feedback was applied
    ///
    /// Counts do not depend on list order, so any ordering of the session's list
    /// gives the same answer.
    #[must_use]
    pub fn candidates_before(&self, words: &[Word]) -> usize {
        count_candidates(words, &self.constraints_before)
    }

    /// Words in `words` admitted after this round's feedback was applied
    #[must_use]
    pub fn candidates_after(&self, words: &[Word]) -> usize {
        count_candidates(words, &self.constraints_after)
    }
}

/// A finished session's history
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub rounds: Vec<Round>,
}

/// One solve session over a fixed candidate order
pub struct Session<'a> {
    words: &'a [Word],
    config: SessionConfig,
    constraints: ConstraintSet,
    state: SessionState,
    rounds: Vec<Round>,
}

impl<'a> Session<'a> {
    /// Start a session with fully open constraints
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::{Oracle, Outcome, Session, SessionConfig};
    /// use wordle_sieve::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "slate", "irate", "grate"]);
    /// let mut session = Session::new(&words, SessionConfig::default());
    /// let mut oracle = Oracle::new(Word::new("grate").unwrap());
    ///
    /// let report = session.run(&mut oracle).unwrap();
    /// assert!(report.outcome.is_solved());
    /// assert_eq!(report.outcome.rounds(), report.rounds.len());
    /// ```
    #[must_use]
    pub const fn new(words: &'a [Word], config: SessionConfig) -> Self {
        Self {
            words,
            config,
            constraints: ConstraintSet::new(config.count_policy),
            state: SessionState::Guessing,
            rounds: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Candidate list in the order this session scans it
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Size of the full candidate list
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words still admitted by the current constraints
    #[must_use]
    pub fn remaining(&self) -> usize {
        count_candidates(self.words, &self.constraints)
    }

    /// Terminal outcome, once the session has ended
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let rounds = self.rounds.len();
        match self.state {
            SessionState::Solved => Some(Outcome::Solved { rounds }),
            SessionState::Exhausted => Some(Outcome::Exhausted { rounds }),
            SessionState::OutOfRounds => Some(Outcome::OutOfRounds { rounds }),
            SessionState::Guessing | SessionState::AwaitingFeedback(_) => None,
        }
    }

    /// Produce the next guess
    ///
    /// Returns the pending guess again if feedback has not been submitted yet, and
    /// `None` once the session is over. Running out of candidates moves the session
    /// to `Exhausted`.
    pub fn next_guess(&mut self) -> Option<Word> {
        match self.state {
            SessionState::AwaitingFeedback(guess) => Some(guess),
            SessionState::Guessing => {
                if self
                    .config
                    .max_rounds
                    .is_some_and(|limit| self.rounds.len() >= limit)
                {
                    self.state = SessionState::OutOfRounds;
                    return None;
                }
                if let Some(&guess) = next_candidate(self.words, &self.constraints) {
                    self.state = SessionState::AwaitingFeedback(guess);
                    Some(guess)
                } else {
                    debug!("no candidates left after {} round(s)", self.rounds.len());
                    self.state = SessionState::Exhausted;
                    None
                }
            }
            SessionState::Solved | SessionState::Exhausted | SessionState::OutOfRounds => None,
        }
    }

    /// Apply feedback for the pending guess
    ///
    /// # Errors
    /// `Error::NoPendingGuess` when no guess is awaiting feedback.
    pub fn submit(&mut self, feedback: Feedback) -> Result<SessionState> {
        let SessionState::AwaitingFeedback(guess) = self.state else {
            return Err(Error::NoPendingGuess);
        };

        let constraints_before = self.constraints;
        self.constraints.update(&guess, &feedback);

        let number = self.rounds.len() + 1;
        if log_enabled!(Level::Debug) {
            debug!(
                "round {number}: {guess} -> {feedback} ({} -> {} candidates)",
                count_candidates(self.words, &constraints_before),
                self.remaining()
            );
        }

        self.rounds.push(Round {
            number,
            guess,
            feedback,
            constraints_before,
            constraints_after: self.constraints,
        });

        self.state = if feedback.is_solved() {
            SessionState::Solved
        } else {
            SessionState::Guessing
        };
        Ok(self.state)
    }

    /// Withdraw the last completed round, restoring the constraints it replaced
    ///
    /// A pending guess is discarded too. Returns the withdrawn round.
    pub fn undo(&mut self) -> Option<Round> {
        let round = self.rounds.pop()?;
        self.constraints = round.constraints_before;
        self.state = SessionState::Guessing;
        Some(round)
    }

    /// Start over with fresh constraints and no history
    pub fn reset(&mut self) {
        self.constraints = ConstraintSet::new(self.config.count_policy);
        self.state = SessionState::Guessing;
        self.rounds.clear();
    }

    /// Drive the session to a terminal state
    ///
    /// # Errors
    /// Propagates the first error from `source`; the session is abandoned.
    pub fn run<S: FeedbackSource + ?Sized>(&mut self, source: &mut S) -> Result<SessionReport> {
        while let Some(guess) = self.next_guess() {
            let feedback = source.feedback(self.rounds.len() + 1, &guess)?;
            self.submit(feedback)?;
        }

        let outcome = self.outcome().ok_or(Error::NoPendingGuess)?;
        Ok(SessionReport {
            outcome,
            rounds: self.rounds.clone(),
        })
    }
}

/// Run a complete simulated session against `answer`
///
/// # Errors
/// Never fails for an [`Oracle`]; the `Result` mirrors [`Session::run`].
pub fn simulate(words: &[Word], answer: Word, config: SessionConfig) -> Result<SessionReport> {
    Session::new(words, config).run(&mut Oracle::new(answer))
}
