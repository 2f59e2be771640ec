//! Contact file parsing
//!
//! CSV and spreadsheet intake behind one entry point; the format is picked
//! by file extension and both parsers produce the same [`TableData`].

mod csv;
mod xlsx;

use std::path::Path;

use calldeck_domain::{CallDeckError, Result, TableData};
use tracing::{info, instrument};

/// Parse a contact file into headers and rows.
///
/// The extension picks the parser: `.csv` for CSV, `.xlsx`/`.xls` for
/// spreadsheets. A file with no data rows is an error, since every later
/// wizard step assumes at least one contact.
#[instrument]
pub fn load_contact_table(path: &Path) -> Result<TableData> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "csv" => csv::parse_csv(path)?,
        "xlsx" | "xls" => xlsx::parse_spreadsheet(path)?,
        other => {
            return Err(CallDeckError::File(format!(
                "unsupported file type {other:?}; expected .csv, .xlsx or .xls"
            )))
        }
    };

    if table.is_empty() {
        return Err(CallDeckError::File("file contains no contact rows".into()));
    }

    info!(rows = table.len(), columns = table.headers.len(), "parsed contact file");
    Ok(table)
}
