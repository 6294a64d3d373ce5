//! Error taxonomy shared by the library

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The errors `wordle_sieve` can produce
///
/// Running out of candidates is not an error; sessions report it as
/// [`Outcome::Exhausted`](crate::solver::Outcome::Exhausted).
#[derive(Debug, Error)]
pub enum Error {
    /// The word-list source could not be opened or read.
    #[error("cannot read word list {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No binary cache exists and no text word list was given.
    #[error("no cached word list found and no text word list given")]
    NoSource,

    /// The source was read but held no valid words.
    #[error("word list {} contains no valid words", .path.display())]
    EmptyWordList { path: PathBuf },

    /// The binary cache exists but its contents are malformed.
    #[error("word list cache {} is corrupt: {reason}", .path.display())]
    CorruptCache { path: PathBuf, reason: String },

    /// Feedback input was not a string of g/y/b verdicts of the right length.
    #[error("invalid feedback \"{0}\": expected {} characters from g, y, b", crate::WORD_LENGTH)]
    InvalidFeedback(String),

    /// Feedback was submitted while no guess was waiting for it.
    #[error("no guess is awaiting feedback")]
    NoPendingGuess,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// Reading or writing the terminal failed.
    #[error("terminal I/O error")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
