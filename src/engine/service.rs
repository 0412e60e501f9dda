//! Route codes → service tiers.

use serde::Serialize;
use std::fmt;

/// Service tier derived from a route code prefix; drives the pay rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceTier {
    #[serde(rename = "Next Day")]
    NextDay,
    #[serde(rename = "Same Day")]
    SameDay,
    Montreal,
    Other,
}

impl ServiceTier {
    /// The business label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceTier::NextDay => "Next Day",
            ServiceTier::SameDay => "Same Day",
            ServiceTier::Montreal => "Montreal",
            ServiceTier::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a route code by prefix.
///
/// `YYZ-SD` must be checked before the looser `YYZ-` so same-day routes never
/// fall through to next-day. Codes with no recognized prefix, including the
/// empty string a missing cell arrives as, classify as [`ServiceTier::Other`].
pub fn categorize_service(route_code: &str) -> ServiceTier {
    if route_code.starts_with("YYZ-SD") {
        ServiceTier::SameDay
    } else if route_code.starts_with("YYZ-") {
        ServiceTier::NextDay
    } else if route_code.starts_with("YUL-") {
        ServiceTier::Montreal
    } else {
        ServiceTier::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_beats_next_day() {
        // YYZ-SD also starts with YYZ-, so priority order matters
        assert_eq!(categorize_service("YYZ-SD12"), ServiceTier::SameDay);
        assert_eq!(categorize_service("YYZ-SD"), ServiceTier::SameDay);
    }

    #[test]
    fn test_next_day_prefix() {
        assert_eq!(categorize_service("YYZ-0423"), ServiceTier::NextDay);
        assert_eq!(categorize_service("YYZ-S"), ServiceTier::NextDay);
    }

    #[test]
    fn test_montreal_prefix() {
        assert_eq!(categorize_service("YUL-77"), ServiceTier::Montreal);
    }

    #[test]
    fn test_unrecognized_routes_are_other() {
        assert_eq!(categorize_service(""), ServiceTier::Other);
        assert_eq!(categorize_service("YYZ"), ServiceTier::Other);
        assert_eq!(categorize_service("yyz-01"), ServiceTier::Other);
        assert_eq!(categorize_service("YVR-01"), ServiceTier::Other);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ServiceTier::NextDay.to_string(), "Next Day");
        assert_eq!(ServiceTier::SameDay.to_string(), "Same Day");
        assert_eq!(ServiceTier::Montreal.to_string(), "Montreal");
    }
}
