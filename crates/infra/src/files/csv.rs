//! CSV contact file parsing

use std::fs::File;
use std::path::Path;

use calldeck_domain::{Result, TableData};
use csv::ReaderBuilder;

use crate::errors::InfraError;

/// Read a CSV file into headers and rows.
///
/// The reader runs in flexible mode since exported contact lists often have
/// ragged rows; short rows read as empty cells downstream. Fully blank lines
/// are dropped here so they never reach the classifier.
pub(crate) fn parse_csv(path: &Path) -> Result<TableData> {
    let file = File::open(path).map_err(InfraError::from)?;
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let headers: Vec<String> =
        reader.headers().map_err(InfraError::from)?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(InfraError::from)?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(TableData::new(headers, rows))
}
