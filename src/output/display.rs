//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, guesses};
use crate::commands::{BenchmarkResult, OrderStats, SimulationResult};
use crate::core::Word;
use crate::solver::{Outcome, SessionReport};
use colored::Colorize;

/// Print one simulated session; candidate counts are taken over `words`
pub fn print_session_report(label: &str, report: &SessionReport, words: &[Word], verbose: bool) {
    println!("\n{} {}", "▶".cyan(), label.bright_cyan().bold());

    for round in &report.rounds {
        println!(
            "  Turn {}: {} {}",
            round.number,
            round.guess.text().to_uppercase(),
            feedback_to_emoji(&round.feedback)
        );
        if verbose {
            println!(
                "          Candidates: {} → {}",
                round.candidates_before(words),
                round.candidates_after(words)
            );
        }
    }

    match report.outcome {
        Outcome::Solved { rounds } => {
            println!("  {}", format!("✅ Solved in {}", guesses(rounds)).green().bold());
        }
        Outcome::Exhausted { rounds } => {
            println!(
                "  {}",
                format!("❌ Not found after {}", guesses(rounds)).red().bold()
            );
        }
        Outcome::OutOfRounds { rounds } => {
            println!(
                "  {}",
                format!("⏹ Stopped at the limit of {}", guesses(rounds)).yellow()
            );
        }
    }
}

/// Print both passes of a simulation over `words`
pub fn print_simulation(result: &SimulationResult, words: &[Word], verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_session_report("Plain order", &result.plain, words, verbose);
    print_session_report("Ranked order", &result.ranked, words, verbose);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    print_order_stats("Plain order", &result.plain, result.total_words);
    print_order_stats("Ranked order", &result.ranked, result.total_words);
}

fn print_order_stats(label: &str, stats: &OrderStats, total_words: usize) {
    println!("\n📈 {}", format!("{label}:").bright_cyan().bold());
    println!("   Solved:           {}/{}", stats.solved, total_words);
    if stats.exhausted > 0 {
        println!("   Not found:        {}", stats.exhausted.to_string().red());
    }
    if stats.out_of_rounds > 0 {
        println!("   Round limit:      {}", stats.out_of_rounds.to_string().yellow());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses()).bright_yellow().bold()
    );

    let (Some(min), Some(max)) = (stats.min_guesses, stats.max_guesses) else {
        return;
    };
    println!("   Best case:        {}", min.to_string().green());
    println!("   Worst case:       {}", max.to_string().yellow());

    for guess_count in min..=max {
        if let Some(&count) = stats.distribution.get(&guess_count) {
            let pct = (count as f64 / total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print a ranking table
pub fn print_ranking(ranked: &[(Word, f64)], total_words: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("TOP {} OF {} WORDS", ranked.len(), total_words)
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let best = ranked.first().map_or(0.0, |(_, score)| *score);
    for (i, (word, score)) in ranked.iter().enumerate() {
        let bar = create_progress_bar(*score, best, 30);
        println!(
            "  {:3}. {} [{}] {:.2}",
            i + 1,
            word.text().to_uppercase().bright_yellow(),
            bar.green(),
            score
        );
    }
}
