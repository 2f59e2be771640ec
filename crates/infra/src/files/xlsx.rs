//! Spreadsheet contact file parsing

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use calldeck_domain::{CallDeckError, Result, TableData};

use crate::errors::InfraError;

/// Read the first worksheet into headers and rows.
///
/// Row zero is the header row. Rows that are blank in every cell are
/// dropped, matching the CSV parser.
pub(crate) fn parse_spreadsheet(path: &Path) -> Result<TableData> {
    let mut workbook = open_workbook_auto(path).map_err(InfraError::from)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CallDeckError::File("spreadsheet has no worksheets".into()))?;

    let range = workbook.worksheet_range(&sheet_name).map_err(InfraError::from)?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(cells) => cells.iter().map(cell_text).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<String>> = rows_iter
        .filter(|cells| cells.iter().any(|cell| !cell_text(cell).trim().is_empty()))
        .map(|cells| cells.iter().map(cell_text).collect())
        .collect();

    Ok(TableData::new(headers, rows))
}

/// Render one cell the way an operator typed it.
///
/// Spreadsheets store numeric phone columns as floats; an integral float
/// must not pick up a trailing `.0`, which would corrupt the number before
/// normalization ever sees it.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(value) if value.fract() == 0.0 => format!("{}", *value as i64),
        Data::Int(value) => value.to_string(),
        other => other.to_string(),
    }
}
