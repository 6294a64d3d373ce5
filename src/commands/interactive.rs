//! Interactive solving mode
//!
//! Suggests a guess, reads the feedback the puzzle showed, and repeats. Malformed
//! feedback is reported and asked for again rather than ending the session.

use crate::core::{Feedback, Word};
use crate::error::Result;
use crate::output::formatters::{feedback_to_emoji, guesses};
use crate::solver::{Outcome, Session, SessionConfig, candidates};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES: usize = 10;

/// Run the interactive solver over `words`, reading from `input` and writing to `out`
///
/// Returns when the user quits or `input` reaches end of file.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use wordle_sieve::commands::run_interactive;
/// use wordle_sieve::solver::SessionConfig;
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]);
/// let mut out = Vec::new();
/// run_interactive(&words, SessionConfig::default(), &b"ggggg\nquit\n"[..], &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Solved in 1 guess"));
/// ```
pub fn run_interactive<R: BufRead, W: Write>(
    words: &[Word],
    config: SessionConfig,
    mut input: R,
    mut out: W,
) -> Result<()> {
    print_banner(&mut out)?;

    let mut session = Session::new(words, config);

    loop {
        let Some(guess) = session.next_guess() else {
            print_outcome(&session, &mut out)?;
            let Some(command) = prompt(&mut input, &mut out, "Command ('undo', 'new', 'quit')")?
            else {
                return Ok(());
            };
            match command.as_str() {
                "undo" | "u" => undo(&mut session, &mut out)?,
                "new" | "n" => new_game(&mut session, &mut out)?,
                "quit" | "q" | "exit" => return farewell(&mut out),
                _ => writeln!(out, "Unknown command: {command}\n")?,
            }
            continue;
        };

        print_suggestion(&session, &guess, &mut out)?;

        let Some(line) = prompt(&mut input, &mut out, "Feedback (g/y/b, 'win', or command)")?
        else {
            return Ok(());
        };

        match line.as_str() {
            "quit" | "q" | "exit" => return farewell(&mut out),
            "new" | "n" => new_game(&mut session, &mut out)?,
            "undo" | "u" => undo(&mut session, &mut out)?,
            "win" | "solved" => {
                session.submit(Feedback::SOLVED)?;
            }
            _ => match Feedback::parse(&line) {
                Ok(feedback) => {
                    session.submit(feedback)?;
                }
                Err(e) => {
                    debug!("rejected feedback line {line:?}");
                    writeln!(out, "❌ {e}\n")?;
                }
            },
        }
    }
}

fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Wordle Sieve - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "After each guess, enter the feedback the puzzle showed:\n")?;
    writeln!(out, "  - g for green (right letter, right position)")?;
    writeln!(out, "  - y for yellow (letter elsewhere in the word)")?;
    writeln!(out, "  - b for gray (letter not in the word)")?;
    writeln!(out, "  - Or type 'win' if the guess was right!\n")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for a new game, 'undo' to undo the last guess\n"
    )?;
    Ok(())
}

fn print_suggestion<W: Write>(session: &Session<'_>, guess: &Word, out: &mut W) -> Result<()> {
    let remaining = session.remaining();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Round {}: {remaining} of {} candidates remaining",
        session.rounds().len() + 1,
        session.word_count()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "\n📊 Suggested guess: {}\n",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;

    if remaining <= SHOW_CANDIDATES {
        writeln!(out, "Remaining candidates:")?;
        for candidate in candidates(session.words(), session.constraints()) {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_outcome<W: Write>(session: &Session<'_>, out: &mut W) -> Result<()> {
    match session.outcome() {
        Some(Outcome::Solved { rounds }) => {
            writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
            let banner = format!("🎉 Solved in {}", guesses(rounds));
            writeln!(out, "  {}", banner.bright_green().bold())?;
            writeln!(out, "\n  Guess history:")?;
            for round in session.rounds() {
                writeln!(
                    out,
                    "    {}. {} {}",
                    round.number,
                    round.guess.text().to_uppercase(),
                    feedback_to_emoji(&round.feedback)
                )?;
            }
            writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
        }
        Some(Outcome::Exhausted { rounds }) => {
            let message = format!(
                "❌ No candidates remain after {}. The feedback may be incorrect.",
                guesses(rounds)
            );
            writeln!(out, "\n{}", message.red().bold())?;
        }
        Some(Outcome::OutOfRounds { rounds }) => {
            writeln!(out, "\n{}", format!("⏹ Round limit of {rounds} reached.").yellow())?;
        }
        None => {}
    }
    Ok(())
}

fn undo<W: Write>(session: &mut Session<'_>, out: &mut W) -> Result<()> {
    if let Some(round) = session.undo() {
        writeln!(
            out,
            "✓ Undone {}! Back to round {}\n",
            round.guess.text().to_uppercase(),
            round.number
        )?;
    } else {
        writeln!(out, "Nothing to undo!\n")?;
    }
    Ok(())
}

fn new_game<W: Write>(session: &mut Session<'_>, out: &mut W) -> Result<()> {
    session.reset();
    writeln!(out, "\n🔄 New game started!\n")?;
    Ok(())
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Print `message`, read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
