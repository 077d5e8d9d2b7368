//! Character-sum hash functions for table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hash function applied to a key before the modulo-by-capacity step.
///
/// Both variants sum the key's bytes in a `u64` with wrapping arithmetic, so
/// very long keys never overflow and the bucket index `hash % capacity` is
/// always within `[0, capacity)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashFunction {
    /// Sum of character codes.
    CharSum,
    /// Position-weighted sum: `Σ (i + 1) * code(i)`.
    #[default]
    PositionWeighted,
}

impl HashFunction {
    /// Hash a key.
    pub fn hash(&self, key: &str) -> u64 {
        match self {
            HashFunction::CharSum => key
                .bytes()
                .fold(0u64, |acc, b| acc.wrapping_add(b as u64)),
            HashFunction::PositionWeighted => {
                key.bytes().enumerate().fold(0u64, |acc, (i, b)| {
                    acc.wrapping_add((i as u64 + 1).wrapping_mul(b as u64))
                })
            }
        }
    }

    /// Map a key to a bucket index for a table with `capacity` buckets.
    pub fn bucket_index(&self, key: &str, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        (self.hash(key) % capacity as u64) as usize
    }

    /// Get the name of the hash function.
    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::CharSum => "char_sum",
            HashFunction::PositionWeighted => "position_weighted",
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
