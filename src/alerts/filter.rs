//! Pure alert filter predicates
//!
//! All filters are non-mutating and order-preserving.

use super::{Alert, AlertCategory, AlertSeverity};
use crate::config::VisibilityFilter;

/// Alerts of one category.
pub fn filter_by_category(alerts: &[Alert], category: AlertCategory) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| alert.category == category)
        .cloned()
        .collect()
}

/// Alerts of one severity grade.
pub fn filter_by_severity(alerts: &[Alert], severity: AlertSeverity) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| alert.severity == severity)
        .cloned()
        .collect()
}

/// Active warnings only.
pub fn active_warnings(alerts: &[Alert]) -> Vec<Alert> {
    filter_by_severity(alerts, AlertSeverity::Warning)
}

/// Active watches only.
pub fn active_watches(alerts: &[Alert]) -> Vec<Alert> {
    filter_by_severity(alerts, AlertSeverity::Watch)
}

/// Alerts whose category is enabled in the display layer's visibility map.
pub fn visible(alerts: &[Alert], filter: &VisibilityFilter) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| filter.is_visible(alert.category))
        .cloned()
        .collect()
}
