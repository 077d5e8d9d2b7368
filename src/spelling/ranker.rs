//! Bounded top-K selection of the closest words.

use serde::{Deserialize, Serialize};

/// Number of suggestions reported for a misspelled word.
pub const DEFAULT_MATCH_COUNT: usize = 5;

/// A dictionary word paired with its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The dictionary word.
    pub word: String,
    /// Edit distance from the queried word.
    pub distance: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Candidate {
            word: word.into(),
            distance,
        }
    }
}

/// Keeps the `k` smallest-distance candidates seen so far, sorted ascending.
///
/// Each offer is an insertion step over at most `k` slots, so ranking `n`
/// words costs O(n·k) without sorting the whole stream. An incoming candidate
/// only moves ahead of strictly worse ones, so among equal distances the
/// earlier offer stays first.
///
/// # Examples
///
/// ```
/// use spellmap::spelling::TopKRanker;
///
/// let mut ranker = TopKRanker::new(2);
/// ranker.offer("far", 4);
/// ranker.offer("near", 1);
/// ranker.offer("middle", 2);
///
/// let ranked = ranker.into_ranked();
/// assert_eq!(ranked[0].word, "near");
/// assert_eq!(ranked[1].word, "middle");
/// ```
#[derive(Debug, Clone)]
pub struct TopKRanker {
    k: usize,
    slots: Vec<Candidate>,
}

impl TopKRanker {
    /// Create a ranker keeping at most `k` candidates.
    pub fn new(k: usize) -> Self {
        TopKRanker {
            k,
            slots: Vec::with_capacity(k),
        }
    }

    /// Offer a word at `distance`. Returns whether it entered the top `k`.
    pub fn offer(&mut self, word: &str, distance: usize) -> bool {
        match self.position_for(distance) {
            Some(position) => {
                self.place(position, Candidate::new(word, distance));
                true
            }
            None => false,
        }
    }

    /// Offer an already built candidate. Returns whether it entered the top `k`.
    pub fn offer_candidate(&mut self, candidate: Candidate) -> bool {
        match self.position_for(candidate.distance) {
            Some(position) => {
                self.place(position, candidate);
                true
            }
            None => false,
        }
    }

    fn position_for(&self, distance: usize) -> Option<usize> {
        // Walk from the worst slot towards the best while the newcomer is strictly better.
        let mut position = self.slots.len();
        while position > 0 && distance < self.slots[position - 1].distance {
            position -= 1;
        }
        (position < self.k).then_some(position)
    }

    fn place(&mut self, position: usize, candidate: Candidate) {
        if self.slots.len() == self.k {
            self.slots.pop();
        }
        self.slots.insert(position, candidate);
    }

    /// Largest distance currently retained, if any.
    pub fn worst_distance(&self) -> Option<usize> {
        self.slots.last().map(|candidate| candidate.distance)
    }

    /// Maximum number of retained candidates.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of candidates currently retained.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no candidate has been retained.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current ranking, best first.
    pub fn ranked(&self) -> &[Candidate] {
        &self.slots
    }

    /// Consume the ranker, returning the ranking best first.
    pub fn into_ranked(self) -> Vec<Candidate> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(ranker: &TopKRanker) -> Vec<usize> {
        ranker.ranked().iter().map(|c| c.distance).collect()
    }

    #[test]
    fn test_keeps_five_smallest_in_order() {
        let mut ranker = TopKRanker::new(DEFAULT_MATCH_COUNT);
        for (i, distance) in [5, 3, 8, 1, 9, 2, 7, 4, 6, 0].into_iter().enumerate() {
            ranker.offer(&format!("w{i}"), distance);
        }

        assert_eq!(distances(&ranker), vec![0, 1, 2, 3, 4]);
        assert_eq!(ranker.worst_distance(), Some(4));
    }

    #[test]
    fn test_ties_keep_first_offered() {
        let mut ranker = TopKRanker::new(3);
        ranker.offer("first", 2);
        ranker.offer("second", 2);
        ranker.offer("third", 2);
        // Equal to the worst retained distance, so it is discarded.
        assert!(!ranker.offer("fourth", 2));
        ranker.offer("best", 1);

        let words: Vec<_> = ranker.into_ranked().into_iter().map(|c| c.word).collect();
        assert_eq!(words, vec!["best", "first", "second"]);
    }

    #[test]
    fn test_fewer_offers_than_k() {
        let mut ranker = TopKRanker::new(5);
        ranker.offer("b", 3);
        ranker.offer("a", 1);

        assert_eq!(ranker.len(), 2);
        assert_eq!(distances(&ranker), vec![1, 3]);
    }

    #[test]
    fn test_offer_candidate_matches_offer() {
        let mut ranker = TopKRanker::new(2);
        assert!(ranker.offer_candidate(Candidate::new("far", 4)));
        assert!(ranker.offer("near", 1));
        assert!(ranker.offer_candidate(Candidate::new("middle", 2)));
        assert!(!ranker.offer_candidate(Candidate::new("farther", 5)));

        assert_eq!(
            ranker.into_ranked(),
            vec![Candidate::new("near", 1), Candidate::new("middle", 2)]
        );
    }

    #[test]
    fn test_zero_k_retains_nothing() {
        let mut ranker = TopKRanker::new(0);
        assert!(!ranker.offer("a", 0));
        assert!(ranker.is_empty());
        assert_eq!(ranker.worst_distance(), None);
    }
}
