//! The required-column contract for raw scan exports.

use crate::error::{Error, Result};
use crate::parser::ScanTable;

/// The export's scan-timestamp column. The name encodes the timestamp
/// contract; the value is carried internally as `Scan_Date`.
pub const SCAN_DATETIME_COLUMN: &str = "ScanCode_DateTime_(MM/DD/YYYY_HH:mm:ss)";

/// Columns every export must carry, in contract order.
///
/// Names are compared case-sensitively against headers that have already had
/// spaces replaced with underscores (see [`crate::parser::parse_table`]).
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "Item_ID",
    "Bill_To_Account_Number",
    "Tracking_Number",
    "Service",
    SCAN_DATETIME_COLUMN,
    "Status",
    "Status_Description",
    "Route_Code",
    "Delivery_Driver_Name",
    "Delivery_Address",
    "Delivery_City",
    "Delivery_Province",
    "Delivery_Postal_Code/ZIP",
    "Delivery_Country",
    "Latitude",
    "Longitude",
    "Client_Name",
];

/// Resolved positions of the required columns within one parsed table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub item_id: usize,
    pub bill_to_account_number: usize,
    pub tracking_number: usize,
    pub service: usize,
    pub scan_date: usize,
    pub status: usize,
    pub status_description: usize,
    pub route_code: usize,
    pub delivery_driver_name: usize,
    pub delivery_address: usize,
    pub delivery_city: usize,
    pub delivery_province: usize,
    pub delivery_postal_code: usize,
    pub delivery_country: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub client_name: usize,
}

/// Names from [`REQUIRED_COLUMNS`] absent from the table's header, in
/// contract order. Empty means the schema is complete.
pub fn missing_columns(table: &ScanTable) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| name.to_string())
        .collect()
}

/// Validates the schema and resolves every required column to its position.
///
/// Fails with [`Error::Schema`] naming every missing column, before any row
/// is touched. Duplicate header names resolve to the first occurrence.
pub fn validate(table: &ScanTable) -> Result<ColumnMap> {
    let mut missing = Vec::new();
    let mut col = |name: &str| -> usize {
        match table.column_index(name) {
            Some(index) => index,
            None => {
                missing.push(name.to_string());
                0
            }
        }
    };

    // Field initialization order matches REQUIRED_COLUMNS, so `missing`
    // comes out in contract order.
    let columns = ColumnMap {
        item_id: col("Item_ID"),
        bill_to_account_number: col("Bill_To_Account_Number"),
        tracking_number: col("Tracking_Number"),
        service: col("Service"),
        scan_date: col(SCAN_DATETIME_COLUMN),
        status: col("Status"),
        status_description: col("Status_Description"),
        route_code: col("Route_Code"),
        delivery_driver_name: col("Delivery_Driver_Name"),
        delivery_address: col("Delivery_Address"),
        delivery_city: col("Delivery_City"),
        delivery_province: col("Delivery_Province"),
        delivery_postal_code: col("Delivery_Postal_Code/ZIP"),
        delivery_country: col("Delivery_Country"),
        latitude: col("Latitude"),
        longitude: col("Longitude"),
        client_name: col("Client_Name"),
    };

    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(Error::Schema(missing))
    }
}
