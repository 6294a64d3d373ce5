//! In-memory word store
//!
//! The store is filled once, either from the binary cache or from a text list,
//! and never changes afterwards.

use super::{cache, loader};
use crate::core::Word;
use crate::error::{Error, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Text file, one word per line
    Text(PathBuf),
    /// Binary cache written by a previous run
    Cache(PathBuf),
}

/// How to locate the word list at startup
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Cache file to read, or to create from the text list when missing
    pub cache: Option<PathBuf>,
    /// Text list used only when no cache is available
    pub text: Option<PathBuf>,
}

/// Ordered, read-only list of fixed-length words
///
/// Order is the source order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load words from a single source
    ///
    /// # Errors
    /// `Error::SourceUnavailable` if the source cannot be read, `Error::NoSource`
    /// if a cache source does not exist, `Error::CorruptCache` for a bad cache and
    /// `Error::EmptyWordList` when a text list holds no valid words.
    pub fn load(source: &WordSource) -> Result<Self> {
        let words = match source {
            WordSource::Text(path) => {
                let words = loader::load_from_file(path)?;
                if words.is_empty() {
                    return Err(Error::EmptyWordList { path: path.clone() });
                }
                words
            }
            WordSource::Cache(path) => cache::read_cache(path)?.ok_or(Error::NoSource)?,
        };
        Ok(Self::from_words(words))
    }

    /// Open the word list the way the command line does
    ///
    /// Uses the cache when it exists. Otherwise loads the text list and, if a cache
    /// path is configured, writes the cache for later runs. Failing to write the
    /// cache is logged and otherwise ignored.
    ///
    /// # Errors
    /// `Error::NoSource` when there is neither a cache nor a text list, plus any
    /// error from [`WordStore::load`]. Nothing is cached when loading fails.
    pub fn open(options: &StoreOptions) -> Result<Self> {
        if let Some(cache_path) = &options.cache {
            match Self::load(&WordSource::Cache(cache_path.clone())) {
                Ok(store) => {
                    info!("binary list found at {}, using it", cache_path.display());
                    return Ok(store);
                }
                Err(Error::NoSource) => {}
                Err(e) => return Err(e),
            }
        }

        let text_path = options.text.as_deref().ok_or(Error::NoSource)?;
        info!("loading text word list from {}", text_path.display());
        let store = Self::load(&WordSource::Text(text_path.to_path_buf()))?;

        if let Some(cache_path) = &options.cache {
            store.save_cache(cache_path);
        }

        Ok(store)
    }

    fn save_cache(&self, path: &Path) {
        match cache::write_cache(path, &self.words) {
            Ok(()) => info!(
                "wrote binary list of {} words to {}",
                self.words.len(),
                path.display()
            ),
            Err(e) => warn!("could not write binary list {}: {e}", path.display()),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordle_sieve_store_{name}_{}", std::process::id()))
    }

    #[test]
    fn open_generates_cache_from_text() {
        let text = temp_path("gen.txt");
        let cache_path = temp_path("gen.bin");
        let _ = fs::remove_file(&cache_path);
        fs::write(&text, "crane\nslate\nbad\n").unwrap();

        let options = StoreOptions {
            cache: Some(cache_path.clone()),
            text: Some(text.clone()),
        };
        let store = WordStore::open(&options).unwrap();
        assert_eq!(store.words(), words_from_slice(&["crane", "slate"]).as_slice());
        assert!(cache_path.exists());

        // Second open ignores the text list entirely
        fs::remove_file(&text).unwrap();
        let cached = WordStore::open(&options).unwrap();
        fs::remove_file(&cache_path).unwrap();

        assert_eq!(cached, store);
    }

    #[test]
    fn open_without_any_source_fails() {
        let options = StoreOptions {
            cache: Some(temp_path("absent.bin")),
            text: None,
        };
        assert!(matches!(WordStore::open(&options), Err(Error::NoSource)));
        assert!(matches!(
            WordStore::open(&StoreOptions::default()),
            Err(Error::NoSource)
        ));
    }

    #[test]
    fn open_with_missing_text_is_source_unavailable() {
        let options = StoreOptions {
            cache: None,
            text: Some(temp_path("nope.txt")),
        };
        assert!(matches!(
            WordStore::open(&options),
            Err(Error::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn accessors() {
        let store = WordStore::from_words(words_from_slice(&["crane", "slate"]));
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.words()[1].text(), "slate");
    }

    #[test]
    fn list_without_valid_words_is_rejected_and_not_cached() {
        let text = temp_path("invalid.txt");
        let cache_path = temp_path("invalid.bin");
        let _ = fs::remove_file(&cache_path);
        fs::write(&text, "cranes\nabc\n\n").unwrap();

        let options = StoreOptions {
            cache: Some(cache_path.clone()),
            text: Some(text.clone()),
        };
        let result = WordStore::open(&options);
        let cache_written = cache_path.exists();

        // A good list given afterwards is still picked up
        fs::write(&text, "crane\nslate\n").unwrap();
        let recovered = WordStore::open(&options).unwrap();
        fs::remove_file(&text).unwrap();
        let _ = fs::remove_file(&cache_path);

        assert!(matches!(result, Err(Error::EmptyWordList { .. })));
        assert!(!cache_written);
        assert_eq!(recovered.len(), 2);
    }

    #[test]
    fn load_reads_either_source() {
        let text = temp_path("either.txt");
        let cache_path = temp_path("either.bin");
        fs::write(&text, "crane\nslate\n").unwrap();
        cache::write_cache(&cache_path, &words_from_slice(&["slate", "crane"])).unwrap();

        let from_text = WordStore::load(&WordSource::Text(text.clone())).unwrap();
        let from_cache = WordStore::load(&WordSource::Cache(cache_path.clone())).unwrap();
        fs::remove_file(&text).unwrap();
        fs::remove_file(&cache_path).unwrap();

        assert_eq!(from_text.words()[0].text(), "crane");
        assert_eq!(from_cache.words()[0].text(), "slate");
        assert!(matches!(
            WordStore::load(&WordSource::Cache(cache_path)),
            Err(Error::NoSource)
        ));
    }
}
