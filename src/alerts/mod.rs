//! NWS weather alerts: domain model, classification, fetching, filtering

pub mod classify;
pub mod fetch;
pub mod filter;

pub use classify::{classify, severity, AlertCategory, AlertSeverity};
pub use fetch::AlertFetcher;
pub use filter::{
    active_warnings, active_watches, filter_by_category, filter_by_severity, visible,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::{AlertFeature, LatLng};

/// A classified weather alert.
///
/// Built from one raw feed feature; immutable after creation. `category`
/// and `severity` are pure functions of `raw_event_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub headline: String,
    pub location: LatLng,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub area_description: String,
    pub raw_event_name: String,
}

impl Alert {
    /// Build an alert from a raw feed feature. `None` when the feature's
    /// polygon has no usable vertex for a representative point.
    pub fn from_feature(feature: &AlertFeature) -> Option<Self> {
        let props = &feature.properties;
        let location = feature.geometry.representative_point()?;

        Some(Self {
            id: props.id.clone(),
            category: classify(&props.event),
            severity: severity(&props.event),
            title: format!("{} - {}", props.event, props.area_desc),
            description: props.description.clone().unwrap_or_default(),
            headline: props.headline.clone().unwrap_or_default(),
            location,
            issued_at: props.sent,
            expires_at: props.expires,
            area_description: props.area_desc.clone(),
            raw_event_name: props.event.clone(),
        })
    }
}

/// Classify a batch of raw features, dropping those without geometry.
pub fn parse_alerts(features: &[AlertFeature]) -> Vec<Alert> {
    features
        .iter()
        .filter_map(|feature| {
            let alert = Alert::from_feature(feature);
            if alert.is_none() {
                log::warn!(
                    "Dropping alert {} with no usable geometry",
                    feature.properties.id
                );
            }
            alert
        })
        .collect()
}
