//! Word lists for the solver
//!
//! Text lists are parsed by [`loader`]; [`cache`] holds the fixed-record binary
//! copy; the store decides between them at startup.

pub mod cache;
pub mod loader;
mod store;

pub use store::{StoreOptions, WordSource, WordStore};

/// Default binary cache file name
pub const DEFAULT_CACHE: &str = "5_letter_words.bin";
