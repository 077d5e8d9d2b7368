//! Error types for the Spellmap library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellmapError`] enum. Looking up or removing a missing key is never an
//! error; those operations return `None` instead.
//!
//! # Examples
//!
//! ```
//! use spellmap::error::{Result, SpellmapError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellmapError::config("initial capacity must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spellmap operations.
#[derive(Error, Debug)]
pub enum SpellmapError {
    /// I/O errors (dictionary files, console streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (non-positive capacity, bad load factor, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Hash table errors
    #[error("Table error: {0}")]
    Table(String),

    /// Word extraction errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellmapError.
pub type Result<T> = std::result::Result<T, SpellmapError>;

impl SpellmapError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellmapError::Config(msg.into())
    }

    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        SpellmapError::Table(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellmapError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellmapError::Other(msg.into())
    }
}
