//! Text word list loading
//!
//! One word per line. Lines that are not exactly `WORD_LENGTH` letters are skipped.

use crate::core::Word;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Words parsed from a text source, plus how many non-blank lines were rejected
#[derive(Debug, Default)]
pub struct ParsedList {
    pub words: Vec<Word>,
    pub skipped: usize,
}

/// Parse a word list from text
///
/// Order and duplicates are preserved. Surrounding whitespace (including a `\r`
/// from CRLF files) is ignored and letters are lowercased. Blank lines are ignored;
/// other invalid lines are counted in `skipped`.
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::parse_word_list;
///
/// let list = parse_word_list("crane\r\nno\nslate\n\nsl4te\n");
/// assert_eq!(list.words.len(), 2);
/// assert_eq!(list.skipped, 2);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> ParsedList {
    let mut list = ParsedList::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => list.words.push(word),
            Err(e) => {
                debug!("skipping word list line {trimmed:?}: {e}");
                list.skipped += 1;
            }
        }
    }

    list
}

/// Load words from a text file
///
/// Bytes that are not valid UTF-8 only invalidate the lines they appear on.
///
/// # Errors
///
/// Returns `Error::SourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_word_list(&String::from_utf8_lossy(&bytes));
    if list.skipped > 0 {
        warn!(
            "skipped {} line(s) in {} that are not {}-letter words",
            list.skipped,
            path.display(),
            crate::WORD_LENGTH
        );
    }

    Ok(list.words)
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
