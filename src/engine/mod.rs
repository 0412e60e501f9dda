//! The dispatch aggregation engine.
//!
//! Takes a parsed scan table through schema validation, field normalization,
//! one grouped aggregation pass, and the service-tier split.

pub mod aggregate;
pub mod normalize;
pub mod partition;
pub mod rates;
pub mod schema;
pub mod service;
pub mod status;
pub mod types;

use tracing::{debug, info};

use crate::engine::types::DispatchReport;
use crate::error::Result;
use crate::parser::ScanTable;

/// Runs the full pipeline over one parsed table.
pub fn process(table: &ScanTable) -> Result<DispatchReport> {
    let columns = schema::validate(table)?;
    debug!(rows = table.row_count(), "scan table schema validated");

    let events = normalize::normalize_events(table, &columns)?;
    let rows = aggregate::aggregate(&events);
    info!(
        events = events.len(),
        route_instances = rows.len(),
        "aggregated scan events into route instances"
    );

    Ok(partition::partition(rows))
}
