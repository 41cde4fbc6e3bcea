//! Frequency counter - Builds the distinct-word to count map
//!
//! Keys are exact, case-sensitive word strings: "The" and "the" are counted
//! separately. Ordering is applied only at render time.

use std::collections::HashMap;

/// Mapping from distinct word to positive occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word of an ordered sequence
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::new();
        for word in words {
            map.record(word);
        }
        map
    }

    /// Record one occurrence: insert with count 1 or increment the stored count
    pub fn record(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Pointwise sum with another map.
    ///
    /// Counting two halves of a sequence and merging equals counting the
    /// concatenated sequence once.
    #[allow(dead_code)]
    pub fn merge(&mut self, other: FrequencyMap) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Occurrence count for a word, if present
    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of word tokens consumed
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}
