//! Dictionary loading for spelling checks.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::error::Result;
use crate::spelling::word_source::{ReaderWordSource, WordSource, normalize};
use crate::table::{ChainedHashTable, TableConfig, TableStats};

/// A set of known words backed by a [`ChainedHashTable`].
///
/// Each stored value counts how many times the word occurred in the source.
#[derive(Debug)]
pub struct Dictionary {
    words: ChainedHashTable<u32>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new(config: &TableConfig) -> Result<Self> {
        Ok(Dictionary {
            words: ChainedHashTable::with_config(config.clone())?,
        })
    }

    /// Load every word produced by `source`.
    pub fn load<S: WordSource>(source: &mut S, config: &TableConfig) -> Result<Self> {
        let start_time = Instant::now();
        let mut dictionary = Dictionary::new(config)?;

        while let Some(word) = source.next_word()? {
            dictionary.add_word(&word);
        }

        info!(
            "Loaded {} words in {:.3}s (capacity {}, load factor {:.3})",
            dictionary.len(),
            start_time.elapsed().as_secs_f64(),
            dictionary.words.capacity(),
            dictionary.words.load_factor()
        );

        Ok(dictionary)
    }

    /// Load a dictionary from a plain-text word list.
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: &TableConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        info!("Loading dictionary from {}", path.as_ref().display());
        let mut source = ReaderWordSource::new(BufReader::new(file))?;
        Self::load(&mut source, config)
    }

    /// Build a dictionary from in-memory text.
    pub fn from_text(text: &str, config: &TableConfig) -> Result<Self> {
        let mut source = ReaderWordSource::new(text.as_bytes())?;
        Self::load(&mut source, config)
    }

    /// Add one occurrence of a word.
    pub fn add_word(&mut self, word: &str) {
        let normalized = normalize(word);
        match self.words.get_mut(&normalized) {
            Some(count) => *count += 1,
            None => {
                self.words.put(&normalized, 1);
            }
        }
    }

    /// Remove a word entirely. Returns whether it was present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.words.remove(&normalize(word)).is_some()
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&normalize(word))
    }

    /// Number of occurrences seen while loading, 0 if unknown.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&normalize(word)).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.size()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The underlying table.
    pub fn table(&self) -> &ChainedHashTable<u32> {
        &self.words
    }

    /// Occupancy statistics of the underlying table.
    pub fn stats(&self) -> TableStats {
        self.words.stats()
    }
}
