//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod rank;
pub mod simulate;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, OrderStats, run_benchmark};
pub use interactive::run_interactive;
pub use rank::top_ranked;
pub use simulate::{SimulationResult, simulate_answer};

use crate::core::Word;
use std::borrow::Cow;

/// Candidate order a session scans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    /// Word list order as loaded
    Plain,
    /// Letter-position frequency order
    #[default]
    Ranked,
}

impl Order {
    /// `words` in this order; plain order borrows the input
    #[must_use]
    pub fn arrange(self, words: &[Word]) -> Cow<'_, [Word]> {
        match self {
            Self::Plain => Cow::Borrowed(words),
            Self::Ranked => Cow::Owned(crate::solver::rank(words)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn plain_order_is_untouched() {
        let words = words_from_slice(&["zzzzz", "crane", "crate"]);
        assert_eq!(Order::Plain.arrange(&words).as_ref(), words.as_slice());
    }

    #[test]
    fn ranked_order_moves_outlier_last() {
        // zzzzz leads the list but shares no letters with the other three
        let words = words_from_slice(&["zzzzz", "crane", "crate", "grate"]);
        let arranged = Order::Ranked.arrange(&words);
        assert_eq!(arranged.last().map(Word::text), Some("zzzzz"));
    }
}
