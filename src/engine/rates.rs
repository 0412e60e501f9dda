//! Per-delivery pay rates by service tier and city.

use crate::engine::service::ServiceTier;

/// Looks up the pay rate for one delivered package.
///
/// `city` must be the normalized (cleaned, title-cased) value; the premium
/// cities are matched exactly against that form. The lookup is total: tiers
/// outside the rate card pay 0.0.
pub fn rate_for(service: ServiceTier, city: &str) -> f64 {
    match service {
        ServiceTier::NextDay => {
            if matches!(city, "Oakville" | "Burlington") {
                2.45
            } else {
                2.20
            }
        }
        ServiceTier::SameDay => 3.50,
        ServiceTier::Montreal => 3.00,
        ServiceTier::Other => 0.0,
    }
}
