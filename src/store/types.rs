//! Core data types for the Casefile record store
//!
//! This module defines the fundamental types used throughout the engine:
//! - `CrimeRecord`: a single incident report
//! - `InvalidRecordError`: validation failures raised at load time

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single incident record
///
/// Created once at load time and immutable thereafter; every derived
/// structure (indexes, rankings, clusters, reports) is a computed view
/// that never mutates the record set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrimeRecord {
    /// Unique identifier within a store
    pub id: u32,
    /// Calendar date of the incident (day precision)
    pub date: NaiveDate,
    /// Time of day (minute precision)
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Crime category (e.g. "Theft", "Burglary"); never empty
    #[serde(rename = "type")]
    pub kind: String,
    /// Where the incident occurred; never empty
    pub location: String,
    /// Free-text details; may be empty
    #[serde(default)]
    pub description: String,
}

impl CrimeRecord {
    /// Create a new record with an empty description
    pub fn new(
        id: u32,
        date: NaiveDate,
        time: NaiveTime,
        kind: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            time,
            kind: kind.into(),
            location: location.into(),
            description: String::new(),
        }
    }

    /// Builder: set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Parse a record from string fields, as they arrive from CSV/JSON
    /// sources. Date must be ISO 8601 (`2024-01-15`), time `HH:MM` or
    /// `HH:MM:SS`.
    pub fn parse(
        id: u32,
        date: &str,
        time: &str,
        kind: &str,
        location: &str,
        description: &str,
    ) -> Result<Self, InvalidRecordError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            InvalidRecordError::UnparsableDate {
                id,
                value: date.to_string(),
            }
        })?;
        let time = parse_time(time).ok_or_else(|| InvalidRecordError::UnparsableTime {
            id,
            value: time.to_string(),
        })?;

        let record = Self::new(id, date, time, kind, location).description(description);
        record.validate()?;
        Ok(record)
    }

    /// Hour of day (0-23), the key for time-pattern indexing
    pub fn hour(&self) -> u32 {
        use chrono::Timelike;
        self.time.hour()
    }

    /// Check the record invariants: non-empty type and location
    pub fn validate(&self) -> Result<(), InvalidRecordError> {
        if self.kind.trim().is_empty() {
            return Err(InvalidRecordError::EmptyType { id: self.id });
        }
        if self.location.trim().is_empty() {
            return Err(InvalidRecordError::EmptyLocation { id: self.id });
        }
        Ok(())
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Serde helper: times travel as `"HH:MM"` strings, the format the
/// incident feeds use.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: {s}")))
    }
}

/// A record rejected at load time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecordError {
    #[error("record {id}: unparsable date '{value}' (expected YYYY-MM-DD)")]
    UnparsableDate { id: u32, value: String },

    #[error("record {id}: unparsable time '{value}' (expected HH:MM)")]
    UnparsableTime { id: u32, value: String },

    #[error("record {id}: crime type must not be empty")]
    EmptyType { id: u32 },

    #[error("record {id}: location must not be empty")]
    EmptyLocation { id: u32 },

    #[error("duplicate record id {id}")]
    DuplicateId { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_record() {
        let record =
            CrimeRecord::parse(1, "2024-01-15", "14:30", "Theft", "Downtown", "Shoplifting")
                .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.hour(), 14);
        assert_eq!(record.kind, "Theft");
        assert_eq!(record.description, "Shoplifting");
    }

    #[test]
    fn test_parse_rejects_bad_date_and_time() {
        let err = CrimeRecord::parse(7, "01/15/2024", "14:30", "Theft", "Downtown", "").unwrap_err();
        assert!(matches!(err, InvalidRecordError::UnparsableDate { id: 7, .. }));

        let err = CrimeRecord::parse(7, "2024-01-15", "2pm", "Theft", "Downtown", "").unwrap_err();
        assert!(matches!(err, InvalidRecordError::UnparsableTime { id: 7, .. }));
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        let err = CrimeRecord::parse(3, "2024-01-15", "14:30", "", "Downtown", "").unwrap_err();
        assert_eq!(err, InvalidRecordError::EmptyType { id: 3 });

        let err = CrimeRecord::parse(3, "2024-01-15", "14:30", "Theft", "  ", "").unwrap_err();
        assert_eq!(err, InvalidRecordError::EmptyLocation { id: 3 });
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = CrimeRecord::parse(1, "2024-01-15", "14:30", "Theft", "Downtown", "Bike theft")
            .unwrap();
        let json = serde_json::to_string(&record).unwrap();

        // Wire format keeps the original field name and HH:MM times
        assert!(json.contains("\"type\":\"Theft\""));
        assert!(json.contains("\"time\":\"14:30\""));

        let restored: CrimeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }

    #[test]
    fn test_time_accepts_seconds() {
        let record =
            CrimeRecord::parse(1, "2024-01-15", "14:30:59", "Theft", "Downtown", "").unwrap();
        assert_eq!(record.hour(), 14);
    }
}
