//! Shared test fixtures for feed data

use chrono::{Duration, Utc};

use super::models::{AlertFeature, AlertProperties, Geometry};

/// Alert feature with a one-ring polygon anchored at the given point.
pub fn alert_feature(id: &str, event: &str, lat: f64, lng: f64) -> AlertFeature {
    let now = Utc::now();
    AlertFeature {
        properties: AlertProperties {
            id: id.to_string(),
            event: event.to_string(),
            headline: Some(format!("{} issued", event)),
            description: Some(format!("{} in effect for the test area", event)),
            sent: now,
            expires: now + Duration::hours(1),
            area_desc: "Cook County, IL".to_string(),
        },
        geometry: Geometry {
            coordinates: vec![vec![[lng, lat], [lng + 0.1, lat + 0.1], [lng + 0.1, lat - 0.1]]],
        },
    }
}

/// Feature whose polygon has no vertices (unextractable point).
pub fn degenerate_feature(id: &str, event: &str) -> AlertFeature {
    let mut feature = alert_feature(id, event, 0.0, 0.0);
    feature.geometry.coordinates.clear();
    feature
}
