//! Field-level cleanup: city names and scan timestamps.

use chrono::NaiveDateTime;

use crate::engine::schema::ColumnMap;
use crate::engine::status::categorize_status;
use crate::engine::types::{NormalizedEvent, ScanEvent};
use crate::error::{Error, Result};
use crate::parser::ScanTable;

/// Chrono rendering of the `MM/DD/YYYY HH:mm:ss` scan-timestamp contract.
pub const SCAN_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Cleans a raw city value: strips every character outside `[A-Za-z0-9\s]`,
/// then title-cases each whitespace-delimited word.
///
/// Whitespace runs are kept as found. Dropped characters do not end a word,
/// so `"O'Fallon"` cleans to `"Ofallon"`, not `"OFallon"`. A word led by a
/// digit gets no capitalization. Absent input is the empty string and stays
/// that way; this function never fails.
pub fn clean_city(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for c in raw.chars() {
        if c.is_whitespace() {
            cleaned.push(c);
            at_word_start = true;
        } else if c.is_ascii_alphanumeric() {
            if at_word_start {
                cleaned.push(c.to_ascii_uppercase());
            } else {
                cleaned.push(c.to_ascii_lowercase());
            }
            at_word_start = false;
        }
    }

    cleaned
}

/// Parses a scan timestamp into its full date-time value. Surrounding
/// whitespace is ignored.
pub fn parse_scan_timestamp(raw: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw.trim(), SCAN_TIMESTAMP_FORMAT)
}

/// Builds the normalized event stream, preserving input order.
///
/// City cleaning never fails. An unparseable scan timestamp aborts the whole
/// run with the offending line number; every downstream grouping depends on
/// the date component, so there is no partial result worth keeping.
pub fn normalize_events(table: &ScanTable, columns: &ColumnMap) -> Result<Vec<NormalizedEvent>> {
    let mut events = Vec::with_capacity(table.row_count());

    for (i, record) in table.records().iter().enumerate() {
        let mut event = ScanEvent::from_record(record, columns);
        // the header occupies line 1
        let line = i + 2;

        let scan_date = parse_scan_timestamp(&event.scan_date).map_err(|source| Error::Parse {
            line,
            value: event.scan_date.clone(),
            source,
        })?;

        event.delivery_city = clean_city(&event.delivery_city);
        let category = categorize_status(&event.status);

        events.push(NormalizedEvent {
            date: scan_date.date(),
            time: scan_date.time(),
            category,
            event,
        });
    }

    Ok(events)
}
