//! Casefile Ingest
//!
//! Dataset loading from CSV and JSON files plus the embedded sample
//! dataset. Importers parse and validate each record but never touch the
//! store; callers hand the resulting batch to `RecordStore::load`, which
//! applies its own all-or-nothing check.

mod csv;
mod json;
mod sample;

pub use self::csv::{CsvImportResult, CsvImporter};
pub use self::json::{import_json, import_json_str};
pub use sample::sample_records;

use thiserror::Error;

use crate::store::InvalidRecordError;

/// Errors raised while loading a dataset
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Invalid(#[from] InvalidRecordError),
}
