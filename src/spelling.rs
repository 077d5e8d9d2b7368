//! Spelling checks and "Did you mean?" suggestions.
//!
//! A [`Dictionary`] loads words from a [`WordSource`] into a chained hash table.
//! A [`SpellChecker`] answers membership queries directly and otherwise scans
//! the whole dictionary, scoring every word by edit distance and keeping the
//! closest few with a bounded [`TopKRanker`].

pub mod checker;
pub mod dictionary;
pub mod levenshtein;
pub mod matcher;
pub mod ranker;
pub mod word_source;

// Re-export commonly used types
pub use checker::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use matcher::*;
pub use ranker::*;
pub use word_source::*;
