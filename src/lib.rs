//! # Spellmap
//!
//! A resizable separate-chaining hash table and a spelling suggester built on it.
//!
//! ## Features
//!
//! - Owned-node chained hash table with configurable load factor and growth
//! - Selectable character-sum hash functions
//! - Levenshtein edit distance with a dynamically sized table
//! - Bounded top-K ranking of dictionary words without a full sort
//! - Command line front end with human and JSON output

pub mod cli;
pub mod error;
pub mod spelling;
pub mod table;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
