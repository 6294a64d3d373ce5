//! Binary word list cache
//!
//! Layout: a little-endian `u32` word count followed by `count * WORD_LENGTH`
//! letter bytes, one fixed-length record per word, in list order.

use crate::WORD_LENGTH;
use crate::core::Word;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

const HEADER_LEN: usize = std::mem::size_of::<u32>();

/// Serialize words into the cache layout
///
/// # Errors
/// Returns an `InvalidInput` I/O error if the list has more than `u32::MAX` words.
pub fn encode(words: &[Word]) -> io::Result<Vec<u8>> {
    let count = u32::try_from(words.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many words to cache"))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + words.len() * WORD_LENGTH);
    bytes.extend_from_slice(&count.to_le_bytes());
    for word in words {
        bytes.extend_from_slice(word.chars());
    }
    Ok(bytes)
}

/// Deserialize words from the cache layout
///
/// `path` is only used for error reporting.
///
/// # Errors
/// Returns `Error::CorruptCache` when the header is missing or zero, the body
/// length does not match the count, or a record holds anything but lowercase letters.
pub fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Word>> {
    let corrupt = |reason: String| Error::CorruptCache {
        path: path.to_path_buf(),
        reason,
    };

    let (header, body) = bytes
        .split_first_chunk::<HEADER_LEN>()
        .ok_or_else(|| corrupt("missing word count header".to_string()))?;
    let count = u32::from_le_bytes(*header) as usize;
    if count == 0 {
        return Err(corrupt("cache holds no words".to_string()));
    }

    if body.len() != count * WORD_LENGTH {
        return Err(corrupt(format!(
            "header declares {count} words but body holds {} bytes",
            body.len()
        )));
    }

    body.chunks_exact(WORD_LENGTH)
        .enumerate()
        .map(|(index, record)| {
            let chars: [u8; WORD_LENGTH] = record
                .try_into()
                .map_err(|_| corrupt(format!("record {index} is truncated")))?;
            Word::from_bytes(chars).map_err(|e| corrupt(format!("record {index}: {e}")))
        })
        .collect()
}

/// Read the cache at `path`
///
/// Returns `Ok(None)` when no cache file exists.
///
/// # Errors
/// `Error::SourceUnavailable` if the file exists but cannot be read, and
/// `Error::CorruptCache` if it cannot be decoded.
pub fn read_cache(path: &Path) -> Result<Option<Vec<Word>>> {
    match fs::read(path) {
        Ok(bytes) => decode(&bytes, path).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `words` to the cache at `path`, replacing any existing file
///
/// # Errors
/// Returns the underlying I/O error.
pub fn write_cache(path: &Path, words: &[Word]) -> io::Result<()> {
    fs::write(path, encode(words)?)
}
