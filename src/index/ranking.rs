//! Ranking over frequency indexes
//!
//! Sorts a frequency index's entries by count, descending, and returns the
//! top N. Ties keep first-seen order: the sort is stable over the index's
//! build order, which downstream legend/color assignment depends on.

use std::hash::Hash;

use serde::Serialize;

use super::frequency::FrequencyIndex;

/// One ranked `(key, count)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub count: u64,
}

/// The `n` highest-count entries, descending by count.
///
/// Returns all entries when `n` exceeds the number of distinct keys.
pub fn top_n<K: Eq + Hash + Clone>(index: &FrequencyIndex<K>, n: usize) -> Vec<RankedEntry<K>> {
    let mut entries: Vec<RankedEntry<K>> = index
        .entries()
        .map(|(key, count)| RankedEntry {
            key: key.clone(),
            count,
        })
        .collect();

    // Stable sort over first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::frequency::by_type;
    use crate::store::CrimeRecord;

    fn record(id: u32, kind: &str) -> CrimeRecord {
        CrimeRecord::parse(id, "2024-01-15", "10:00", kind, "Downtown", "").unwrap()
    }

    #[test]
    fn test_descending_by_count() {
        let records = vec![
            record(1, "Vandalism"),
            record(2, "Theft"),
            record(3, "Theft"),
            record(4, "Theft"),
            record(5, "Burglary"),
            record(6, "Burglary"),
        ];

        let ranked = top_n(&by_type(&records), 10);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();

        assert_eq!(keys, ["Theft", "Burglary", "Vandalism"]);
        assert_eq!(counts, [3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // Assault and Theft both occur twice; Assault was seen first
        let records = vec![
            record(1, "Assault"),
            record(2, "Theft"),
            record(3, "Assault"),
            record(4, "Theft"),
            record(5, "Fraud"),
        ];

        let ranked = top_n(&by_type(&records), 3);
        let keys: Vec<&str> = ranked.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["Assault", "Theft", "Fraud"]);
    }

    #[test]
    fn test_n_caps_length() {
        let records = vec![record(1, "Theft"), record(2, "Burglary")];
        let index = by_type(&records);

        assert_eq!(top_n(&index, 1).len(), 1);
        assert_eq!(top_n(&index, 5).len(), 2);
        assert_eq!(top_n(&index, 0).len(), 0);
    }

    #[test]
    fn test_empty_index() {
        assert!(top_n(&by_type(&[]), 5).is_empty());
    }
}
