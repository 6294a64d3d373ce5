//! Simulation against a known answer
//!
//! Runs two independent sessions: one over the list in its original order and one
//! over the frequency-ranked order.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{SessionConfig, SessionReport, rank, simulate};
use log::{info, warn};

/// Both passes of a simulation
pub struct SimulationResult {
    pub answer: Word,
    pub plain: SessionReport,
    pub ranked: SessionReport,
}

/// Simulate solving `answer` over `words` in plain and ranked order
///
/// The two passes share nothing but the read-only word list and run concurrently.
///
/// # Errors
///
/// Returns `Error::InvalidWord` if `answer` is not a valid word.
pub fn simulate_answer(
    words: &[Word],
    answer: &str,
    config: SessionConfig,
) -> Result<SimulationResult> {
    let answer = Word::new(answer)?;
    if !words.contains(&answer) {
        warn!("{answer} is not in the word list; the sessions cannot solve it");
    }

    let ranked_words = rank(words);
    info!("simulating {answer} over {} words in plain and ranked order", words.len());

    let (plain, ranked) = rayon::join(
        || simulate(words, answer, config),
        || simulate(&ranked_words, answer, config),
    );

    Ok(SimulationResult {
        answer,
        plain: plain?,
        ranked: ranked?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::solver::Outcome;
    use crate::wordlists::loader::words_from_slice;

    fn setup_words() -> Vec<Word> {
        words_from_slice(&["zzzzz", "crane", "slate", "irate", "crate", "grate", "abide"])
    }

    #[test]
    fn both_passes_solve_listed_answer() {
        let words = setup_words();
        let result = simulate_answer(&words, "grate", SessionConfig::default()).unwrap();

        assert_eq!(result.answer.text(), "grate");
        assert!(result.plain.outcome.is_solved());
        assert!(result.ranked.outcome.is_solved());
        assert_eq!(result.plain.rounds[0].guess.text(), "zzzzz");
        assert_ne!(result.ranked.rounds[0].guess.text(), "zzzzz");
    }

    #[test]
    fn uppercase_answer_accepted() {
        let words = setup_words();
        let result = simulate_answer(&words, "ABIDE", SessionConfig::default()).unwrap();
        assert!(result.plain.outcome.is_solved());
    }

    #[test]
    fn unlisted_answer_exhausts_both_passes() {
        let words = setup_words();
        let result = simulate_answer(&words, "moody", SessionConfig::default()).unwrap();

        assert!(matches!(result.plain.outcome, Outcome::Exhausted { .. }));
        assert!(matches!(result.ranked.outcome, Outcome::Exhausted { .. }));
    }

    #[test]
    fn invalid_answer_is_rejected() {
        let words = setup_words();
        assert!(matches!(
            simulate_answer(&words, "toolong", SessionConfig::default()),
            Err(Error::InvalidWord(_))
        ));
    }
}
