//! Core domain types for the word puzzle
//!
//! Words, per-position verdicts, and the feedback scorer. Everything here is pure
//! and independent of how word lists are loaded or how feedback is obtained.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{ALPHABET_SIZE, Word, WordError, letter_index};
