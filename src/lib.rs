//! Wordle Sieve
//!
//! A constraint-filtering Wordle solver: it keeps per-position allowed letter sets and
//! per-letter minimum counts, and always guesses the first word in its list that
//! still satisfies them. The list can be scanned as loaded or reordered by
//! letter-position frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Feedback, Word};
//! use wordle_sieve::solver::{SessionConfig, simulate};
//! use wordle_sieve::wordlists::loader::words_from_slice;
//!
//! // Score a guess
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("abide").unwrap();
//! assert_eq!(Feedback::score(&guess, &answer).to_string(), "bbyby");
//!
//! // Solve against a known answer
//! let words = words_from_slice(&["crane", "slate", "irate", "grate"]);
//! let report = simulate(&words, Word::new("grate").unwrap(), SessionConfig::default()).unwrap();
//! assert!(report.outcome.is_solved());
//! ```

/// Letters per word
pub const WORD_LENGTH: usize = 5;

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Constraint filtering and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
