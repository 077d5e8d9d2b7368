//! Sizing and growth policy for the chained hash table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellmapError};
use crate::table::hash::HashFunction;

/// Default number of buckets a dictionary table starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;

/// Default load factor at which the table grows.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.8;

/// Default multiplier applied to the bucket count on growth.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Configuration for a [`ChainedHashTable`](crate::table::ChainedHashTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of buckets allocated up front. Must be positive.
    pub initial_capacity: usize,
    /// Grow once `size / capacity` reaches this value.
    pub max_load_factor: f64,
    /// New capacity is `capacity * growth_factor`.
    pub growth_factor: usize,
    /// Hash function used to pick a bucket.
    pub hash_function: HashFunction,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            hash_function: HashFunction::default(),
        }
    }
}

impl TableConfig {
    /// Create a default configuration with the given initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        TableConfig {
            initial_capacity,
            ..Default::default()
        }
    }

    /// Set the hash function.
    pub fn hash_function(mut self, hash_function: HashFunction) -> Self {
        self.hash_function = hash_function;
        self
    }

    /// Check that the policy can keep the table's amortized O(1) guarantees.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(SpellmapError::config(
                "initial capacity must be greater than zero",
            ));
        }
        if !(self.max_load_factor > 0.0 && self.max_load_factor.is_finite()) {
            return Err(SpellmapError::config(format!(
                "max load factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        if self.growth_factor < 2 {
            return Err(SpellmapError::config(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}
