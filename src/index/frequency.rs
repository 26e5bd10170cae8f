//! Frequency index
//!
//! Maps a dimension key (crime type, location, hour of day) to its
//! occurrence count, built in a single pass over a record set. Alongside
//! the counts it tracks the order in which keys were first encountered:
//! downstream ranking breaks count ties in first-seen order, and chart
//! color/legend assignment is position-sensitive, so that order is part of
//! the contract rather than an accident of map iteration.

use std::collections::HashMap;
use std::hash::Hash;

use crate::store::CrimeRecord;

/// Key → count mapping for one dimension, with explicit first-seen order
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex<K> {
    counts: HashMap<K, u64>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> FrequencyIndex<K> {
    /// Build the index with one linear scan. O(n) in record count.
    pub fn build<'a, I, F>(records: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = &'a CrimeRecord>,
        F: Fn(&CrimeRecord) -> K,
    {
        let mut counts = HashMap::new();
        let mut order = Vec::new();

        for record in records {
            let key = key_fn(record);
            let entry = counts.entry(key.clone()).or_insert(0u64);
            if *entry == 0 {
                order.push(key);
            }
            *entry += 1;
        }

        tracing::debug!(distinct_keys = order.len(), "frequency index built");
        Self { counts, order }
    }

    /// Occurrence count for a key (0 if never seen)
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts; equals the number of records scanned
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = (&K, u64)> {
        self.order.iter().map(move |k| (k, self.counts[k]))
    }
}

/// Index records by crime type
pub fn by_type(records: &[CrimeRecord]) -> FrequencyIndex<String> {
    FrequencyIndex::build(records, |r| r.kind.clone())
}

/// Index records by location
pub fn by_location(records: &[CrimeRecord]) -> FrequencyIndex<String> {
    FrequencyIndex::build(records, |r| r.location.clone())
}

/// Index records by hour of day (0-23)
pub fn by_hour(records: &[CrimeRecord]) -> FrequencyIndex<u32> {
    FrequencyIndex::build(records, |r| r.hour())
}
