//! Report persistence and run summaries.
//!
//! Writes one CSV file per service tier and exposes a JSON-serializable
//! summary of the run.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::engine::service::ServiceTier;
use crate::engine::types::{DispatchReport, RouteInstanceSummary};

/// Published report columns, in writing order.
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "Date",
    "Delivery_Driver_Name",
    "Route_Code",
    "Number_of_Packages",
    "Delivery_City",
    "Service",
    "Start_Time",
    "End_Time",
    "Delivered_No",
    "Confirmed_Return",
    "Rates",
    "Amount_to_be_paid",
];

fn tier_suffix(tier: ServiceTier) -> &'static str {
    match tier {
        ServiceTier::NextDay => "next_day",
        ServiceTier::SameDay => "same_day",
        ServiceTier::Montreal => "montreal",
        ServiceTier::Other => "other",
    }
}

/// Writes one CSV file per service tier into `dir`, all stamped with the
/// same generation time. Returns the written paths in view order.
///
/// An empty view still produces its file, holding only the header row.
pub fn write_report(dir: &Path, report: &DispatchReport) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S");

    let mut files = Vec::with_capacity(3);
    for (tier, rows) in report.views() {
        let path = dir.join(format!("dispatch_report_{stamp}_{}.csv", tier_suffix(tier)));
        write_view(&path, rows)?;
        debug!(path = %path.display(), rows = rows.len(), "report view written");
        files.push(path);
    }

    Ok(files)
}

/// Writes one view with an explicit header record, so files for empty views
/// still name their columns.
fn write_view(path: &Path, rows: &[RouteInstanceSummary]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Condensed result of one report run.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub next_day_routes: usize,
    pub same_day_routes: usize,
    pub montreal_routes: usize,
    pub files: Vec<PathBuf>,
}

impl ReportSummary {
    pub fn new(report: &DispatchReport, files: Vec<PathBuf>) -> Self {
        ReportSummary {
            generated_at: Utc::now(),
            next_day_routes: report.next_day.len(),
            same_day_routes: report.same_day.len(),
            montreal_routes: report.montreal.len(),
            files,
        }
    }
}

/// Logs a run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &ReportSummary) {
    debug!("{:#?}", summary);
}

/// Logs a run summary as pretty-printed JSON.
pub fn print_json(summary: &ReportSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::env;

    fn sample_row() -> RouteInstanceSummary {
        RouteInstanceSummary {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            driver: "Jane Doe".to_string(),
            route_code: "YYZ-0423".to_string(),
            packages: 2,
            city: "Oakville".to_string(),
            service: ServiceTier::NextDay,
            start_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 5, 0).unwrap(),
            delivered: 2,
            confirmed_return: 1,
            rate: 2.45,
            amount: 4.9,
        }
    }

    fn sample_report() -> DispatchReport {
        DispatchReport {
            next_day: vec![sample_row()],
            same_day: Vec::new(),
            montreal: Vec::new(),
        }
    }

    #[test]
    fn test_write_report_emits_one_file_per_tier() {
        let dir = env::temp_dir().join("dispatch_reporter_test_three_files");
        let _ = fs::remove_dir_all(&dir);

        let files = write_report(&dir, &sample_report()).unwrap();

        assert_eq!(files.len(), 3);
        let suffixes = ["_next_day.csv", "_same_day.csv", "_montreal.csv"];
        for (file, suffix) in files.iter().zip(suffixes) {
            let name = file.file_name().unwrap().to_str().unwrap();
            assert!(name.starts_with("dispatch_report_"), "{name}");
            assert!(name.ends_with(suffix), "{name}");
            assert!(file.exists());
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_written_view_matches_published_columns() {
        let dir = env::temp_dir().join("dispatch_reporter_test_row_shape");
        let _ = fs::remove_dir_all(&dir);

        let files = write_report(&dir, &sample_report()).unwrap();
        let content = fs::read_to_string(&files[0]).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], OUTPUT_COLUMNS.join(","));
        assert_eq!(
            lines[1],
            "2024-01-15,Jane Doe,YYZ-0423,2,Oakville,Next Day,08:30:00,17:05:00,2,1,2.45,4.9"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_views_still_carry_headers() {
        let dir = env::temp_dir().join("dispatch_reporter_test_empty_views");
        let _ = fs::remove_dir_all(&dir);

        let files = write_report(&dir, &sample_report()).unwrap();
        // the same-day and montreal views hold no rows here
        for file in &files[1..] {
            let content = fs::read_to_string(file).unwrap();
            assert_eq!(content.lines().count(), 1);
            assert_eq!(content.lines().next().unwrap(), OUTPUT_COLUMNS.join(","));
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&ReportSummary::new(&DispatchReport::default(), Vec::new()));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&ReportSummary::new(&DispatchReport::default(), Vec::new())).unwrap();
    }
}
