//! Constraint-based solving
//!
//! The [`ConstraintSet`] records what feedback has revealed, [`next_candidate`]
//! picks the first admitted word in list order, [`rank`] provides an alternative
//! list order, and [`Session`] runs the guess/feedback loop.

mod constraints;
mod filter;
mod ranker;
mod session;

pub use constraints::{ConstraintSet, CountPolicy, LetterSet};
pub use filter::{candidates, count_candidates, next_candidate};
pub use ranker::{FrequencyTable, letter_frequencies, rank, rank_with_scores, word_score};
pub use session::{
    FeedbackSource, Oracle, Outcome, Round, Session, SessionConfig, SessionReport, SessionState,
    simulate,
};
