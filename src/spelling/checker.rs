//! Spell checking against a loaded dictionary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellmapError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::matcher::{best_matches, is_known};
use crate::spelling::ranker::{Candidate, DEFAULT_MATCH_COUNT};
use crate::spelling::word_source::normalize;
use crate::table::TableConfig;

/// Configuration for a [`SpellChecker`] and the dictionary behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckerConfig {
    /// Sizing and growth policy for the dictionary table.
    pub table: TableConfig,
    /// Number of suggestions returned for a misspelled word.
    pub match_count: usize,
}

impl Default for SpellCheckerConfig {
    fn default() -> Self {
        SpellCheckerConfig {
            table: TableConfig::default(),
            match_count: DEFAULT_MATCH_COUNT,
        }
    }
}

impl SpellCheckerConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SpellCheckerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.match_count == 0 {
            return Err(SpellmapError::config("match count must be greater than zero"));
        }
        self.table.validate()
    }
}

/// Result of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The word is in the dictionary.
    Correct { word: String },
    /// The word is unknown; suggestions are ordered best first.
    Misspelled {
        word: String,
        suggestions: Vec<Candidate>,
    },
}

impl CheckOutcome {
    /// The normalized word that was checked.
    pub fn word(&self) -> &str {
        match self {
            CheckOutcome::Correct { word } | CheckOutcome::Misspelled { word, .. } => word,
        }
    }

    /// Check if the word was found in the dictionary.
    pub fn is_correct(&self) -> bool {
        matches!(self, CheckOutcome::Correct { .. })
    }

    /// Suggestions for a misspelled word, empty when correct.
    pub fn suggestions(&self) -> &[Candidate] {
        match self {
            CheckOutcome::Correct { .. } => &[],
            CheckOutcome::Misspelled { suggestions, .. } => suggestions,
        }
    }
}

/// Checks words against a dictionary and suggests the closest entries.
#[derive(Debug)]
pub struct SpellChecker {
    dictionary: Dictionary,
    match_count: usize,
}

impl SpellChecker {
    /// Create a spell checker over a loaded dictionary.
    pub fn new(dictionary: Dictionary, config: &SpellCheckerConfig) -> Result<Self> {
        config.validate()?;
        Ok(SpellChecker {
            dictionary,
            match_count: config.match_count,
        })
    }

    /// Load a dictionary file and build a spell checker over it.
    pub fn from_file<P: AsRef<Path>>(path: P, config: &SpellCheckerConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = Dictionary::load_from_file(path, &config.table)?;
        Self::new(dictionary, config)
    }

    /// Check a word. Known words are reported without ranking.
    pub fn check(&self, word: &str) -> CheckOutcome {
        let word = normalize(word);

        if is_known(self.dictionary.table(), &word) {
            return CheckOutcome::Correct { word };
        }

        let suggestions = best_matches(self.dictionary.table(), &word, self.match_count);
        CheckOutcome::Misspelled { word, suggestions }
    }

    /// The dictionary words are checked against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of suggestions produced for a misspelled word.
    pub fn match_count(&self) -> usize {
        self.match_count
    }
}
