//! Splits aggregated rows into the published per-tier views.

use tracing::warn;

use crate::engine::service::ServiceTier;
use crate::engine::types::{DispatchReport, RouteInstanceSummary};

/// Routes each summary to its tier view, keeping the aggregated row order
/// inside every view.
///
/// Rows whose route code resolved to no published tier belong to no view and
/// are dropped; a nonzero drop count is logged.
pub fn partition(rows: Vec<RouteInstanceSummary>) -> DispatchReport {
    let mut report = DispatchReport::default();
    let mut dropped = 0usize;

    for row in rows {
        match row.service {
            ServiceTier::NextDay => report.next_day.push(row),
            ServiceTier::SameDay => report.same_day.push(row),
            ServiceTier::Montreal => report.montreal.push(row),
            ServiceTier::Other => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            dropped_rows = dropped,
            "dropped route instances outside the published service tiers"
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn row(route: &str, service: ServiceTier) -> RouteInstanceSummary {
        RouteInstanceSummary {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            driver: "Jo".to_string(),
            route_code: route.to_string(),
            packages: 1,
            city: "Toronto".to_string(),
            service,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            delivered: 1,
            confirmed_return: 0,
            rate: 2.2,
            amount: 2.2,
        }
    }

    #[test]
    fn test_rows_land_in_their_tier_view() {
        let report = partition(vec![
            row("YYZ-01", ServiceTier::NextDay),
            row("YYZ-SD2", ServiceTier::SameDay),
            row("YUL-03", ServiceTier::Montreal),
            row("YYZ-04", ServiceTier::NextDay),
        ]);
        assert_eq!(report.next_day.len(), 2);
        assert_eq!(report.same_day.len(), 1);
        assert_eq!(report.montreal.len(), 1);
        assert_eq!(report.row_count(), 4);
    }

    #[test]
    fn test_view_order_follows_input_order() {
        let report = partition(vec![
            row("YYZ-01", ServiceTier::NextDay),
            row("YUL-01", ServiceTier::Montreal),
            row("YYZ-02", ServiceTier::NextDay),
            row("YYZ-03", ServiceTier::NextDay),
        ]);
        let routes: Vec<&str> = report
            .next_day
            .iter()
            .map(|row| row.route_code.as_str())
            .collect();
        assert_eq!(routes, vec!["YYZ-01", "YYZ-02", "YYZ-03"]);
    }

    #[test]
    fn test_unclassified_rows_are_dropped() {
        let report = partition(vec![
            row("ZZZ-9", ServiceTier::Other),
            row("YYZ-01", ServiceTier::NextDay),
        ]);
        assert_eq!(report.row_count(), 1);
        assert!(report.same_day.is_empty());
        assert!(report.montreal.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_views() {
        let report = partition(Vec::new());
        assert_eq!(report, DispatchReport::default());
    }
}
