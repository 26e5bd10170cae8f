//! Search filters
//!
//! Conjunctive filter set applied in one linear pass. Text matching is
//! case-insensitive; the free-text query scans type, location and
//! description together, while the type filter demands an exact (but
//! case-folded) match and the location filter a substring.

use chrono::NaiveDate;

use crate::store::{CrimeRecord, RecordStore};

/// Filter set for record search; every populated field must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    query: Option<String>,
    crime_type: Option<String>,
    location: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl SearchFilters {
    /// An empty filter set; matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query over type, location and description
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Exact (case-insensitive) crime type
    pub fn crime_type(mut self, crime_type: impl Into<String>) -> Self {
        self.crime_type = Some(crime_type.into());
        self
    }

    /// Case-insensitive location substring
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Earliest incident date, inclusive
    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Latest incident date, inclusive
    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether a record passes every populated filter.
    ///
    /// Blank or whitespace-only text filters are treated as absent.
    pub fn matches(&self, record: &CrimeRecord) -> bool {
        if let Some(query) = nonblank(&self.query) {
            let haystack = format!("{} {} {}", record.kind, record.location, record.description)
                .to_lowercase();
            if !haystack.contains(&query.to_lowercase()) {
                return false;
            }
        }

        if let Some(crime_type) = nonblank(&self.crime_type) {
            if !record.kind.eq_ignore_ascii_case(crime_type) {
                return false;
            }
        }

        if let Some(location) = nonblank(&self.location) {
            if !record
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if record.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if record.date > to {
                return false;
            }
        }

        true
    }
}

fn nonblank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Linear scan of the store; matches keep insertion order. O(n).
pub fn search<'a>(store: &'a RecordStore, filters: &SearchFilters) -> Vec<&'a CrimeRecord> {
    let results: Vec<&CrimeRecord> = store.all().iter().filter(|r| filters.matches(r)).collect();
    tracing::debug!(
        scanned = store.len(),
        matched = results.len(),
        "search complete"
    );
    results
}
