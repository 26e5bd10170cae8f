//! In-memory record store
//!
//! Holds the ordered collection of incident records. Read-mostly: the only
//! mutation is `load`, which replaces the whole collection atomically after
//! validating every record. Insertion order is preserved and seeds the
//! first-seen tie-breaks used by the ranking layer.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::types::{CrimeRecord, InvalidRecordError};

/// Ordered, validated collection of incident records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<CrimeRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a batch, rejecting the whole batch on any
    /// invalid record.
    pub fn from_records(records: Vec<CrimeRecord>) -> Result<Self, InvalidRecordError> {
        let mut store = Self::new();
        store.load(records)?;
        Ok(store)
    }

    /// Replace the entire record collection.
    ///
    /// Every record is validated first (non-empty type/location, unique
    /// id); on any violation the store keeps its previous contents - no
    /// partial load is ever observable.
    pub fn load(&mut self, records: Vec<CrimeRecord>) -> Result<(), InvalidRecordError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id) {
                return Err(InvalidRecordError::DuplicateId { id: record.id });
            }
        }

        tracing::info!(count = records.len(), "record store loaded");
        self.records = records;
        Ok(())
    }

    /// All records, in insertion order
    pub fn all(&self) -> &[CrimeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest incident dates, if any records are loaded
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}
