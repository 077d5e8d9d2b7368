//! Separate-chaining hash table used as the dictionary store.
//!
//! The table maps owned string keys to values. Each bucket holds a singly linked
//! chain of entries; new keys are linked at the head of their chain and the
//! bucket vector is rebuilt at a larger size once the load factor reaches the
//! configured threshold.

pub mod chained;
pub mod config;
pub mod hash;

// Re-export commonly used types
pub use chained::*;
pub use config::*;
pub use hash::*;
