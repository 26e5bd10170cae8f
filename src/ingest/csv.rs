//! CSV import
//!
//! Header-driven CSV reader for incident datasets. Columns are located
//! by header name, so column order does not matter; `description` is the
//! only optional column. Bad rows are collected with their line numbers
//! instead of aborting the whole import.

use std::path::Path;

use super::IngestError;
use crate::store::CrimeRecord;

/// How many row errors to keep before truncating the list
const ERROR_LIMIT: usize = 100;

/// Outcome of one CSV import
#[derive(Debug)]
pub struct CsvImportResult {
    pub records: Vec<CrimeRecord>,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

/// Column positions resolved from the header row
struct ColumnMap {
    id: usize,
    date: usize,
    time: usize,
    kind: usize,
    location: usize,
    description: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let require = |name: &str| {
            find(name).ok_or_else(|| IngestError::Parse(format!("missing column: {name}")))
        };

        Ok(Self {
            id: require("id")?,
            date: require("date")?,
            time: require("time")?,
            kind: require("type")?,
            location: require("location")?,
            description: find("description"),
        })
    }
}

/// CSV file importer for incident records
#[derive(Debug, Default)]
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import records from a CSV file.
    pub fn import(&self, path: &Path) -> Result<CsvImportResult, IngestError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        self.import_reader(reader)
    }

    /// Import from an in-memory CSV string.
    pub fn import_str(&self, data: &str) -> Result<CsvImportResult, IngestError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_bytes());
        self.import_reader(reader)
    }

    fn import_reader<R: std::io::Read>(
        &self,
        mut reader: csv::Reader<R>,
    ) -> Result<CsvImportResult, IngestError> {
        let headers = reader
            .headers()
            .map_err(|e| IngestError::Parse(e.to_string()))?
            .clone();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut records = Vec::new();
        let mut rows_failed = 0;
        let mut errors = Vec::new();

        for (row_num, result) in reader.records().enumerate() {
            // Header is line 1
            let line = row_num + 2;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    errors.push(format!("Line {line}: {e}"));
                    rows_failed += 1;
                    continue;
                }
            };

            match parse_row(&row, &columns) {
                Ok(record) => records.push(record),
                Err(e) => {
                    errors.push(format!("Line {line}: {e}"));
                    rows_failed += 1;
                }
            }
        }

        if errors.len() > ERROR_LIMIT {
            let total = errors.len();
            errors.truncate(ERROR_LIMIT);
            errors.push(format!("... and {} more errors", total - ERROR_LIMIT));
        }

        tracing::info!(
            imported = records.len(),
            failed = rows_failed,
            "csv import complete"
        );

        Ok(CsvImportResult {
            records,
            rows_failed,
            errors,
        })
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap) -> Result<CrimeRecord, IngestError> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .map(str::trim)
            .ok_or_else(|| IngestError::Parse(format!("missing field: {name}")))
    };

    let id_field = field(columns.id, "id")?;
    let id: u32 = id_field
        .parse()
        .map_err(|_| IngestError::Parse(format!("invalid id: {id_field:?}")))?;

    let description = columns
        .description
        .and_then(|idx| row.get(idx))
        .unwrap_or("")
        .trim();

    // parse() already enforces the record invariants
    Ok(CrimeRecord::parse(
        id,
        field(columns.date, "date")?,
        field(columns.time, "time")?,
        field(columns.kind, "type")?,
        field(columns.location, "location")?,
        description,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_with_headers_in_any_order() {
        let data = "location,id,type,time,date,description
Downtown,1,Theft,14:30,2024-01-15,shoplifting
Park,2,Vandalism,08:45,2024-01-16,graffiti";

        let result = CsvImporter::new().import_str(data).unwrap();

        assert_eq!(result.rows_failed, 0);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].id, 1);
        assert_eq!(result.records[0].kind, "Theft");
        assert_eq!(result.records[1].location, "Park");
    }

    #[test]
    fn test_description_column_is_optional() {
        let data = "id,date,time,type,location
1,2024-01-15,14:30,Theft,Downtown";

        let result = CsvImporter::new().import_str(data).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].description, "");
    }

    #[test]
    fn test_bad_rows_are_reported_with_line_numbers() {
        let data = "id,date,time,type,location
1,2024-01-15,14:30,Theft,Downtown
x,2024-01-16,08:45,Vandalism,Park
3,not-a-date,08:45,Vandalism,Park
4,2024-01-17,09:00,,Park";

        let result = CsvImporter::new().import_str(data).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.rows_failed, 3);
        assert!(result.errors[0].starts_with("Line 3:"));
        assert!(result.errors[1].starts_with("Line 4:"));
        assert!(result.errors[2].starts_with("Line 5:"));
    }

    #[test]
    fn test_missing_required_column_fails_import() {
        let data = "id,date,time,location
1,2024-01-15,14:30,Downtown";

        let err = CsvImporter::new().import_str(data).unwrap_err();
        assert!(err.to_string().contains("missing column: type"));
    }
}
