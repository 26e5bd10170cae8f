//! JSON import
//!
//! Deserializes a JSON array of incident records. Unlike the CSV path
//! there is no per-row recovery: serde either accepts the whole document
//! or the import fails.

use std::fs;
use std::path::Path;

use super::IngestError;
use crate::store::CrimeRecord;

/// Import records from a JSON file containing an array of incidents.
pub fn import_json(path: &Path) -> Result<Vec<CrimeRecord>, IngestError> {
    let data = fs::read_to_string(path)?;
    import_json_str(&data)
}

/// Import from an in-memory JSON string.
pub fn import_json_str(data: &str) -> Result<Vec<CrimeRecord>, IngestError> {
    let records: Vec<CrimeRecord> = serde_json::from_str(data)?;
    for record in &records {
        record.validate()?;
    }
    tracing::info!(imported = records.len(), "json import complete");
    Ok(records)
}
