//! Groups the normalized event stream into per-route-instance summaries.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveTime;

use crate::engine::rates::rate_for;
use crate::engine::service::categorize_service;
use crate::engine::status::StatusCategory;
use crate::engine::types::{NormalizedEvent, RouteInstanceKey, RouteInstanceSummary};

/// Running state for one route instance while its events stream past.
///
/// Item sets hold distinct `Item_ID`s so repeated scans of the same package
/// never inflate a count. The timing window spans every event in the group,
/// whatever its category.
struct RouteAccum {
    city: String,
    start: NaiveTime,
    end: NaiveTime,
    ofd_items: HashSet<String>,
    delivered_items: HashSet<String>,
    returned_items: HashSet<String>,
}

impl RouteAccum {
    fn new(event: &NormalizedEvent) -> Self {
        let mut acc = RouteAccum {
            city: event.event.delivery_city.clone(),
            start: event.time,
            end: event.time,
            ofd_items: HashSet::new(),
            delivered_items: HashSet::new(),
            returned_items: HashSet::new(),
        };
        acc.note(event);
        acc
    }

    fn observe(&mut self, event: &NormalizedEvent) {
        self.start = self.start.min(event.time);
        self.end = self.end.max(event.time);
        self.note(event);
    }

    fn note(&mut self, event: &NormalizedEvent) {
        let items = match event.category {
            StatusCategory::OfdScans => &mut self.ofd_items,
            StatusCategory::Delivered => &mut self.delivered_items,
            StatusCategory::Return => &mut self.returned_items,
            _ => return,
        };
        items.insert(event.event.item_id.clone());
    }

    fn summarize(self, key: RouteInstanceKey) -> RouteInstanceSummary {
        let service = categorize_service(&key.route_code);
        let rate = rate_for(service, &self.city);
        let delivered = self.delivered_items.len();
        // a return counts only when nobody recorded the package delivered
        let confirmed_return = self
            .returned_items
            .difference(&self.delivered_items)
            .count();

        RouteInstanceSummary {
            date: key.date,
            driver: key.driver,
            route_code: key.route_code,
            packages: self.ofd_items.len(),
            city: self.city,
            service,
            start_time: self.start,
            end_time: self.end,
            delivered,
            confirmed_return,
            rate,
            // pay follows completed deliveries, not what went out on the truck
            amount: rate * delivered as f64,
        }
    }
}

/// Folds events into one summary per (date, driver, route) in a single pass.
///
/// Rows come back sorted ascending by that key. Every observed key yields a
/// row, including groups that never saw an out-for-delivery scan; those
/// report zero packages.
pub fn aggregate(events: &[NormalizedEvent]) -> Vec<RouteInstanceSummary> {
    let mut groups: BTreeMap<RouteInstanceKey, RouteAccum> = BTreeMap::new();

    for event in events {
        let key = RouteInstanceKey {
            date: event.date,
            driver: event.event.delivery_driver_name.clone(),
            route_code: event.event.route_code.clone(),
        };
        groups
            .entry(key)
            .and_modify(|acc| acc.observe(event))
            .or_insert_with(|| RouteAccum::new(event));
    }

    groups
        .into_iter()
        .map(|(key, acc)| acc.summarize(key))
        .collect()
}
