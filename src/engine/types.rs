//! Data types flowing through the dispatch pipeline.

use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use serde::Serialize;

use crate::engine::schema::ColumnMap;
use crate::engine::service::ServiceTier;
use crate::engine::status::StatusCategory;

/// One raw scan row, exactly as ingested. Every cell is kept as text; typing
/// happens during normalization.
#[derive(Debug, Clone, Default)]
pub struct ScanEvent {
    pub item_id: String,
    pub bill_to_account_number: String,
    pub tracking_number: String,
    pub service: String,
    pub scan_date: String,
    pub status: String,
    pub status_description: String,
    pub route_code: String,
    pub delivery_driver_name: String,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_province: String,
    pub delivery_postal_code: String,
    pub delivery_country: String,
    pub latitude: String,
    pub longitude: String,
    pub client_name: String,
}

impl ScanEvent {
    /// Copies one raw record out of the table using resolved column positions.
    pub fn from_record(record: &StringRecord, columns: &ColumnMap) -> Self {
        let cell = |index: usize| record.get(index).unwrap_or("").to_string();

        ScanEvent {
            item_id: cell(columns.item_id),
            bill_to_account_number: cell(columns.bill_to_account_number),
            tracking_number: cell(columns.tracking_number),
            service: cell(columns.service),
            scan_date: cell(columns.scan_date),
            status: cell(columns.status),
            status_description: cell(columns.status_description),
            route_code: cell(columns.route_code),
            delivery_driver_name: cell(columns.delivery_driver_name),
            delivery_address: cell(columns.delivery_address),
            delivery_city: cell(columns.delivery_city),
            delivery_province: cell(columns.delivery_province),
            delivery_postal_code: cell(columns.delivery_postal_code),
            delivery_country: cell(columns.delivery_country),
            latitude: cell(columns.latitude),
            longitude: cell(columns.longitude),
            client_name: cell(columns.client_name),
        }
    }
}

/// A [`ScanEvent`] after normalization: city cleaned in place, scan timestamp
/// split into date and time-of-day, raw status resolved to a category.
///
/// Derived once per input row and immutable afterwards.
#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub event: ScanEvent,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub category: StatusCategory,
}

/// One unit of work: a driver's run of one route on one calendar day.
///
/// Many events share one key. `Ord` sorts ascending by (date, driver, route),
/// which is the published row order of the aggregated table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteInstanceKey {
    pub date: NaiveDate,
    pub driver: String,
    pub route_code: String,
}

/// One aggregated output row per route instance.
///
/// The serde renames are the published report column names; the CSV writer
/// relies on field order matching [`crate::output::OUTPUT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInstanceSummary {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Delivery_Driver_Name")]
    pub driver: String,
    #[serde(rename = "Route_Code")]
    pub route_code: String,
    #[serde(rename = "Number_of_Packages")]
    pub packages: usize,
    #[serde(rename = "Delivery_City")]
    pub city: String,
    #[serde(rename = "Service")]
    pub service: ServiceTier,
    #[serde(rename = "Start_Time")]
    pub start_time: NaiveTime,
    #[serde(rename = "End_Time")]
    pub end_time: NaiveTime,
    #[serde(rename = "Delivered_No")]
    pub delivered: usize,
    #[serde(rename = "Confirmed_Return")]
    pub confirmed_return: usize,
    #[serde(rename = "Rates")]
    pub rate: f64,
    #[serde(rename = "Amount_to_be_paid")]
    pub amount: f64,
}

/// The partitioned engine output: one view per published service tier.
///
/// Route instances classified `Other` are dropped at partition time and do
/// not appear in any view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchReport {
    pub next_day: Vec<RouteInstanceSummary>,
    pub same_day: Vec<RouteInstanceSummary>,
    pub montreal: Vec<RouteInstanceSummary>,
}

impl DispatchReport {
    /// Total rows across the three views.
    pub fn row_count(&self) -> usize {
        self.next_day.len() + self.same_day.len() + self.montreal.len()
    }

    /// The views paired with their tier, in published order.
    pub fn views(&self) -> [(ServiceTier, &[RouteInstanceSummary]); 3] {
        [
            (ServiceTier::NextDay, self.next_day.as_slice()),
            (ServiceTier::SameDay, self.same_day.as_slice()),
            (ServiceTier::Montreal, self.montreal.as_slice()),
        ]
    }
}
