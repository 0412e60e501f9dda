//! CSV parser for raw dispatch scan exports.

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::Result;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A fully materialized scan export: normalized header names plus every data
/// row, untyped.
#[derive(Debug, Clone, Default)]
pub struct ScanTable {
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl ScanTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a named column. The first occurrence wins when an export
    /// repeats a header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Decodes a raw CSV export into a [`ScanTable`].
///
/// Spaces in header names become underscores, so `Route Code` and
/// `Route_Code` address the same column. A leading UTF-8 byte order mark is
/// ignored. Rows whose field count differs from the header fail the whole
/// parse.
///
/// # Errors
///
/// Returns an error if the bytes are not a well-formed delimited table.
pub fn parse_table(bytes: &[u8]) -> Result<ScanTable> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new().from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.replace(' ', "_"))
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }

    debug!(
        rows = records.len(),
        columns = headers.len(),
        "parsed scan table"
    );

    Ok(ScanTable { headers, records })
}
