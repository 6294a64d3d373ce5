//! Benchmark command
//!
//! Simulates every answer in the list (or a sample of it) in both candidate orders
//! and aggregates the outcomes.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Outcome, SessionConfig, rank, simulate};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Only test this many answers
    pub limit: Option<usize>,
    /// Sample answers in random order instead of list order
    pub shuffle: bool,
    pub session: SessionConfig,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

/// Aggregated outcomes for one candidate order
#[derive(Debug, Clone, Default)]
pub struct OrderStats {
    pub solved: usize,
    pub exhausted: usize,
    pub out_of_rounds: usize,
    /// Guesses summed over solved sessions
    pub total_guesses: usize,
    pub min_guesses: Option<usize>,
    pub max_guesses: Option<usize>,
    /// Solved sessions keyed by guess count
    pub distribution: FxHashMap<usize, usize>,
}

impl OrderStats {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Solved { rounds } => {
                self.solved += 1;
                self.total_guesses += rounds;
                self.min_guesses = Some(self.min_guesses.map_or(rounds, |m| m.min(rounds)));
                self.max_guesses = Some(self.max_guesses.map_or(rounds, |m| m.max(rounds)));
                *self.distribution.entry(rounds).or_insert(0) += 1;
            }
            Outcome::Exhausted { .. } => self.exhausted += 1,
            Outcome::OutOfRounds { .. } => self.out_of_rounds += 1,
        }
    }

    /// Sessions recorded
    #[must_use]
    pub const fn total(&self) -> usize {
        self.solved + self.exhausted + self.out_of_rounds
    }

    /// Mean guesses over solved sessions
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.solved as f64
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub plain: OrderStats,
    pub ranked: OrderStats,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the benchmark over answers drawn from `words`
///
/// Each answer is solved once over the plain list and once over the ranked list.
///
/// # Errors
///
/// Propagates any error raised while simulating a session.
///
/// # Examples
/// ```
/// use wordle_sieve::commands::{BenchmarkConfig, run_benchmark};
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "irate", "grate"]);
/// let result = run_benchmark(&words, &BenchmarkConfig::default()).unwrap();
/// assert_eq!(result.plain.solved, 4);
/// assert_eq!(result.ranked.solved, 4);
/// ```
pub fn run_benchmark(words: &[Word], config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let mut answers = words.to_vec();
    if config.shuffle {
        answers.shuffle(&mut rand::rng());
    }
    if let Some(limit) = config.limit {
        answers.truncate(limit);
    }

    let ranked_words = rank(words);
    info!(
        "benchmarking {} answers over {} words",
        answers.len(),
        words.len()
    );

    let pb = progress_bar(answers.len(), config.progress);
    let start = Instant::now();

    let outcomes = answers
        .par_iter()
        .map(|&answer| -> Result<(Outcome, Outcome)> {
            let plain = simulate(words, answer, config.session)?;
            let ranked = simulate(&ranked_words, answer, config.session)?;
            pb.inc(1);
            Ok((plain.outcome, ranked.outcome))
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut plain = OrderStats::default();
    let mut ranked = OrderStats::default();
    for (plain_outcome, ranked_outcome) in outcomes {
        plain.record(plain_outcome);
        ranked.record(ranked_outcome);
    }

    let total_words = answers.len();
    let seconds = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        plain,
        ranked,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let template = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)";
    if let Ok(style) = ProgressStyle::with_template(template) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_words() -> Vec<Word> {
        words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "moody", "abide", "speed", "eerie",
            "robot",
        ])
    }

    #[test]
    fn every_listed_answer_is_solved() {
        let words = setup_words();
        let result = run_benchmark(&words, &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.total_words, words.len());
        assert_eq!(result.plain.solved, words.len());
        assert_eq!(result.ranked.solved, words.len());
        assert_eq!(result.plain.exhausted, 0);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let words = setup_words();
        let result = run_benchmark(&words, &BenchmarkConfig::default()).unwrap();

        for stats in [&result.plain, &result.ranked] {
            let sum: usize = stats.distribution.values().sum();
            assert_eq!(sum, stats.solved);
            assert_eq!(stats.total(), result.total_words);
        }
    }

    #[test]
    fn first_word_solves_in_one() {
        let words = setup_words();
        let result = run_benchmark(&words, &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.plain.min_guesses, Some(1));
        assert_eq!(result.plain.distribution.get(&1), Some(&1));
    }

    #[test]
    fn metrics_are_consistent() {
        let words = setup_words();
        let result = run_benchmark(&words, &BenchmarkConfig::default()).unwrap();

        for stats in [&result.plain, &result.ranked] {
            let average = stats.average_guesses();
            assert!(average >= stats.min_guesses.unwrap() as f64);
            assert!(average <= stats.max_guesses.unwrap() as f64);
        }
    }

    #[test]
    fn limit_and_shuffle_sample_answers() {
        let words = setup_words();
        let config = BenchmarkConfig {
            limit: Some(4),
            shuffle: true,
            ..BenchmarkConfig::default()
        };
        let result = run_benchmark(&words, &config).unwrap();

        assert_eq!(result.total_words, 4);
        assert_eq!(result.plain.solved, 4);
    }

    #[test]
    fn round_limit_is_counted() {
        let words = setup_words();
        let config = BenchmarkConfig {
            session: SessionConfig {
                max_rounds: Some(1),
                ..SessionConfig::default()
            },
            ..BenchmarkConfig::default()
        };
        let result = run_benchmark(&words, &config).unwrap();

        assert_eq!(result.plain.solved, 1);
        assert_eq!(result.plain.out_of_rounds, words.len() - 1);
    }

    #[test]
    fn empty_word_list() {
        let result = run_benchmark(&[], &BenchmarkConfig::default()).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.plain.total(), 0);
        assert!(result.plain.average_guesses().abs() < f64::EPSILON);
        assert_eq!(result.plain.min_guesses, None);
    }
}
