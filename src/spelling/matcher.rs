//! Full-table edit-distance matching.
//!
//! Matching never writes into the table: distances live in [`Candidate`]s built
//! fresh for every query, so stored values survive any number of matching passes.
//! Words are visited in [`ChainedHashTable::iter`] order, which decides how ties
//! are broken.

use log::debug;

use crate::spelling::levenshtein::levenshtein_distance;
use crate::spelling::ranker::{Candidate, TopKRanker};
use crate::table::ChainedHashTable;

/// Exact membership test.
pub fn is_known<V>(table: &ChainedHashTable<V>, word: &str) -> bool {
    table.contains_key(word)
}

/// Lazily pair every key with its distance from `word`, in table iteration order.
pub fn distances<'a, V>(
    table: &'a ChainedHashTable<V>,
    word: &'a str,
) -> impl Iterator<Item = Candidate> + 'a {
    table
        .keys()
        .map(move |key| Candidate::new(key, levenshtein_distance(word, key)))
}

/// Distance from `word` to every key, in table iteration order.
pub fn compute_distances<V>(table: &ChainedHashTable<V>, word: &str) -> Vec<Candidate> {
    distances(table, word).collect()
}

/// The `k` keys closest to `word`, best first.
pub fn best_matches<V>(table: &ChainedHashTable<V>, word: &str, k: usize) -> Vec<Candidate> {
    let mut ranker = TopKRanker::new(k);
    let mut scanned = 0;
    for candidate in distances(table, word) {
        ranker.offer_candidate(candidate);
        scanned += 1;
    }

    debug!(
        "Scanned {} words for {:?}, best distance {:?}",
        scanned,
        word,
        ranker.ranked().first().map(|c| c.distance)
    );

    ranker.into_ranked()
}
