//! Parsed tabular file data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Header row plus data rows from a parsed CSV or XLSX file.
///
/// Rows are positional; a row may be shorter than the header when trailing
/// cells were empty, so access goes through [`TableData::cell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, column), empty string when the row is short
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// One row as a header-keyed JSON object, for carrying the source row
    /// alongside a contact. Columns past the header width are dropped.
    pub fn row_object(&self, row: usize) -> Map<String, Value> {
        let mut object = Map::new();
        if let Some(cells) = self.rows.get(row) {
            for (index, header) in self.headers.iter().enumerate() {
                let cell = cells.get(index).map(String::as_str).unwrap_or("");
                object.insert(header.clone(), Value::String(cell.to_string()));
            }
        }
        object
    }
}
