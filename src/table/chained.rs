//! Separate-chaining hash table with owned entry chains.
//!
//! Every bucket is an `Option<Box<Entry>>` chain head and every entry owns the
//! next one, so an entry always has exactly one owner. Unlinking an entry is a
//! single rewrite of the owning link, whether the entry sits at the head, in
//! the middle or at the tail of its chain.
//!
//! # Iteration order
//!
//! Iteration walks buckets from index 0 upwards and each chain from head to
//! tail. New keys are linked at the head of their chain, and growth moves
//! entries head-first into the new buckets, so the order is a deterministic
//! function of the insertion sequence, the hash function and the growth policy.
//!
//! # Examples
//!
//! ```
//! use spellmap::table::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new(8).unwrap();
//! table.put("hello", 1);
//! table.put("hello", 2);
//!
//! assert_eq!(table.get("hello"), Some(&2));
//! assert_eq!(table.size(), 1);
//! assert_eq!(table.remove("hello"), Some(2));
//! assert!(!table.contains_key("hello"));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellmapError};
use crate::table::config::TableConfig;
use crate::table::hash::HashFunction;

type Link<V> = Option<Box<Entry<V>>>;

/// A key/value node, owned by its bucket slot or by the previous entry.
struct Entry<V> {
    key: String,
    value: V,
    next: Link<V>,
}

/// A string-keyed hash table resolving collisions by chaining.
pub struct ChainedHashTable<V> {
    buckets: Vec<Link<V>>,
    /// Number of live entries across all chains.
    size: usize,
    config: TableConfig,
}

/// Occupancy statistics for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    pub empty_buckets: usize,
    pub load_factor: f64,
    pub longest_chain: usize,
    pub hash_function: HashFunction,
}

fn empty_buckets<V>(capacity: usize) -> Vec<Link<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

impl<V> ChainedHashTable<V> {
    /// Create a table with `capacity` buckets and the default growth policy.
    ///
    /// Fails if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::with_capacity(capacity))
    }

    /// Create a table from an explicit configuration.
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;

        Ok(ChainedHashTable {
            buckets: empty_buckets(config.initial_capacity),
            size: 0,
            config,
        })
    }

    fn bucket_index(&self, key: &str) -> usize {
        self.config
            .hash_function
            .bucket_index(key, self.buckets.len())
    }

    /// Get a reference to the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut link = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(entry) = link {
            if entry.key == key {
                return Some(&entry.value);
            }
            link = entry.next.as_deref();
        }
        None
    }

    /// Get a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let mut link = self.buckets[index].as_deref_mut();
        while let Some(entry) = link {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or update `key`.
    ///
    /// An existing key has its value overwritten in place and the previous
    /// value is returned; no allocation or growth check happens in that case.
    /// A new key is copied into a fresh entry at the head of its chain, after
    /// which the table grows if the load factor reached the threshold.
    pub fn put(&mut self, key: &str, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(key) {
            return Some(mem::replace(slot, value));
        }

        let index = self.bucket_index(key);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            key: key.to_string(),
            value,
            next,
        }));
        self.size += 1;

        if self.load_factor() >= self.config.max_load_factor {
            let new_capacity = self.capacity().saturating_mul(self.config.growth_factor);
            self.rehash(new_capacity);
        }

        None
    }

    /// Remove `key`, returning its value. Missing keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let mut cursor = &mut self.buckets[index];
        while cursor.as_ref().is_some_and(|entry| entry.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.size -= 1;
        Some(removed.value)
    }

    /// Rebuild the table with `new_capacity` buckets.
    ///
    /// Every entry is moved to the head of its chain under the new capacity;
    /// keys and values are preserved exactly.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(SpellmapError::table("cannot resize to zero buckets"));
        }
        self.rehash(new_capacity);
        Ok(())
    }

    fn rehash(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let hash_function = self.config.hash_function;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for mut link in old_buckets {
            while let Some(mut entry) = link {
                link = entry.next.take();
                let index = hash_function.bucket_index(&entry.key, new_capacity);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }

        debug!(
            "Resized table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.size
        );
    }

    /// Drop every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
        self.size = 0;
    }

    /// Number of live entries.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets whose chain is empty.
    pub fn empty_bucket_count(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_none()).count()
    }

    /// `size / capacity` as a real number.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Hash function in use.
    pub fn hash_function(&self) -> HashFunction {
        self.config.hash_function
    }

    /// Configuration the table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn chain_len(link: &Link<V>) -> usize {
        let mut len = 0;
        let mut link = link.as_deref();
        while let Some(entry) = link {
            len += 1;
            link = entry.next.as_deref();
        }
        len
    }

    /// Collect occupancy statistics.
    pub fn stats(&self) -> TableStats {
        TableStats {
            size: self.size,
            capacity: self.capacity(),
            empty_buckets: self.empty_bucket_count(),
            load_factor: self.load_factor(),
            longest_chain: self.buckets.iter().map(Self::chain_len).max().unwrap_or(0),
            hash_function: self.config.hash_function,
        }
    }

    /// Iterate over `(key, value)` pairs, buckets ascending, chains head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.size,
        }
    }

    /// Iterate over keys in [`iter`](Self::iter) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<V> Drop for ChainedHashTable<V> {
    fn drop(&mut self) {
        // Unlink chains one entry at a time instead of recursing through boxes.
        self.clear();
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`ChainedHashTable`].
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, Link<V>>,
    current: Option<&'a Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a ChainedHashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A table whose entries all share one chain and never grow.
    fn single_chain() -> ChainedHashTable<i32> {
        ChainedHashTable::with_config(TableConfig {
            initial_capacity: 1,
            max_load_factor: 1000.0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(ChainedHashTable::<i32>::new(0).is_err());
        assert!(ChainedHashTable::<i32>::new(1).is_ok());
    }

    #[test]
    fn test_basic_operations() {
        let mut table = ChainedHashTable::new(10).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.get("apple"), None);

        assert_eq!(table.put("apple", 1), None);
        assert_eq!(table.put("banana", 2), None);
        assert_eq!(table.get("apple"), Some(&1));
        assert_eq!(table.get("banana"), Some(&2));
        assert!(table.contains_key("apple"));
        assert!(!table.contains_key("cherry"));
        assert_eq!(table.size(), 2);

        if let Some(value) = table.get_mut("apple") {
            *value += 10;
        }
        assert_eq!(table.get("apple"), Some(&11));
    }

    #[test]
    fn test_update_does_not_add_entries() {
        let mut table = ChainedHashTable::new(10).unwrap();

        for i in 0..5 {
            table.put("same", i);
        }

        assert_eq!(table.size(), 1);
        assert_eq!(table.get("same"), Some(&4));
        assert_eq!(table.put("same", 9), Some(4));
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut table = single_chain();
        for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            table.put(key, i as i32);
        }
        // Chain order is head-first: e, d, c, b, a
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["e", "d", "c", "b", "a"]);

        assert_eq!(table.remove("e"), Some(4)); // head
        assert_eq!(table.remove("c"), Some(2)); // middle
        assert_eq!(table.remove("a"), Some(0)); // tail
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["d", "b"]);
        assert_eq!(table.size(), 2);

        assert_eq!(table.get("b"), Some(&1));
        assert_eq!(table.get("d"), Some(&3));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut table = ChainedHashTable::new(4).unwrap();
        table.put("one", 1);

        assert_eq!(table.remove("two"), None);
        assert_eq!(table.size(), 1);
        assert_eq!(table.get("one"), Some(&1));

        let mut empty = ChainedHashTable::<i32>::new(4).unwrap();
        assert_eq!(empty.remove("anything"), None);
        assert_eq!(empty.size(), 0);
    }

    #[test]
    fn test_growth_at_threshold() {
        let mut table = ChainedHashTable::new(10).unwrap();

        for i in 0..7 {
            table.put(&format!("key{i}"), i);
        }
        assert_eq!(table.capacity(), 10);
        assert!((table.load_factor() - 0.7).abs() < 1e-9);

        // 8 / 10 reaches 0.8
        table.put("key7", 7);
        assert_eq!(table.capacity(), 20);
        assert!((table.load_factor() - 0.4).abs() < 1e-9);

        for i in 0..8 {
            assert_eq!(table.get(&format!("key{i}")), Some(&i));
        }
    }

    #[test]
    fn test_load_factor_is_real_division() {
        let mut table = ChainedHashTable::new(4).unwrap();
        table.put("x", 0);
        assert_eq!(table.load_factor(), 0.25);
    }

    #[test]
    fn test_manual_resize_preserves_pairs() {
        let mut table = ChainedHashTable::new(100).unwrap();
        for i in 0..50 {
            table.put(&format!("word{i}"), i);
        }

        table.resize(7).unwrap();
        assert_eq!(table.capacity(), 7);
        assert_eq!(table.size(), 50);
        for i in 0..50 {
            assert_eq!(table.get(&format!("word{i}")), Some(&i));
        }

        assert!(table.resize(0).is_err());
        assert_eq!(table.capacity(), 7);
    }

    #[test]
    fn test_empty_bucket_count() {
        let mut table = single_chain();
        assert_eq!(table.empty_bucket_count(), 1);
        table.put("a", 1);
        table.put("b", 2);
        assert_eq!(table.empty_bucket_count(), 0);

        let table = ChainedHashTable::<i32>::new(5).unwrap();
        assert_eq!(table.empty_bucket_count(), 5);
    }

    #[test]
    fn test_iteration_visits_every_entry() {
        let mut table = ChainedHashTable::new(3).unwrap();
        for i in 0..40 {
            table.put(&format!("k{i}"), i);
        }
        table.remove("k5");

        let iter = table.iter();
        assert_eq!(iter.len(), 39);

        let mut values: Vec<i32> = table.iter().map(|(_, v)| *v).collect();
        values.sort();
        let expected: Vec<i32> = (0..40).filter(|i| *i != 5).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_iteration_order_is_bucket_then_chain() {
        let mut table = ChainedHashTable::with_config(TableConfig {
            initial_capacity: 4,
            max_load_factor: 1000.0,
            hash_function: HashFunction::CharSum,
            ..Default::default()
        })
        .unwrap();

        // 'a' = 97 -> bucket 1, 'b' = 98 -> bucket 2, 'e' = 101 -> bucket 1
        table.put("a", 0);
        table.put("b", 0);
        table.put("e", 0);

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["e", "a", "b"]);
    }

    #[test]
    fn test_clear_and_stats() {
        let mut table = single_chain();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);

        let stats = table.stats();
        assert_eq!(stats.size, 3);
        assert_eq!(stats.capacity, 1);
        assert_eq!(stats.empty_buckets, 0);
        assert_eq!(stats.longest_chain, 3);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 1);
        assert_eq!(table.get("a"), None);
        assert_eq!(table.stats().longest_chain, 0);
    }

    #[test]
    fn test_debug_format() {
        let mut table = ChainedHashTable::new(4).unwrap();
        table.put("k", 1);
        assert_eq!(format!("{table:?}"), r#"{"k": 1}"#);
    }
}
