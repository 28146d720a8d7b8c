//! Alert taxonomy: category and severity classification
//!
//! Both classifiers are pure functions of the raw event name. Category
//! matching is case-insensitive; severity matching is not - see
//! [`severity`] for why the asymmetry stands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable alert category used for display filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertCategory {
    TornadoWarning,
    TornadoWatch,
    SevereThunderstormWarning,
    SevereThunderstormWatch,
    FlashFloodWarning,
    Other,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::TornadoWarning => "tornado-warning",
            AlertCategory::TornadoWatch => "tornado-watch",
            AlertCategory::SevereThunderstormWarning => "severe-thunderstorm-warning",
            AlertCategory::SevereThunderstormWatch => "severe-thunderstorm-watch",
            AlertCategory::FlashFloodWarning => "flash-flood-warning",
            AlertCategory::Other => "other",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning/watch grading, independent of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Watch,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Watch => "watch",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw event name to its category.
///
/// Case-insensitive substring matching in fixed precedence order; the
/// first match wins. Any flood event lands in the flash-flood bucket.
pub fn classify(raw_event: &str) -> AlertCategory {
    let event = raw_event.to_lowercase();

    if event.contains("tornado") && event.contains("warning") {
        AlertCategory::TornadoWarning
    } else if event.contains("tornado") {
        AlertCategory::TornadoWatch
    } else if event.contains("thunderstorm") && event.contains("warning") {
        AlertCategory::SevereThunderstormWarning
    } else if event.contains("thunderstorm") {
        AlertCategory::SevereThunderstormWatch
    } else if event.contains("flood") {
        AlertCategory::FlashFloodWarning
    } else {
        AlertCategory::Other
    }
}

/// Grade an event as warning or watch.
///
/// Keyed off the literal word "Warning" in the original event text, case
/// intact: "TORNADO WARNING" classifies as a tornado warning yet grades as
/// a watch. Upstream event names are title-cased so this holds in
/// practice; kept as published behavior rather than unified with the
/// case-insensitive category match.
pub fn severity(raw_event: &str) -> AlertSeverity {
    if raw_event.contains("Warning") {
        AlertSeverity::Warning
    } else {
        AlertSeverity::Watch
    }
}
