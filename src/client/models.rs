//! Wire models for the NWS alert feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GeoJSON feature collection returned by the alert endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertCollection {
    /// Alert features; some region feeds omit the field entirely
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

/// One raw alert feature from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
    pub geometry: Geometry,
}

/// Alert properties as published by api.weather.gov.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertProperties {
    /// Unique per source feed
    pub id: String,

    /// Raw event name, e.g. "Tornado Warning"
    pub event: String,

    #[serde(default)]
    pub headline: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Issue time
    pub sent: DateTime<Utc>,

    /// Expiry time
    pub expires: DateTime<Utc>,

    /// Human-readable affected area
    #[serde(rename = "areaDesc")]
    pub area_desc: String,
}

/// Polygon geometry: rings of `[lng, lat]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Geometry {
    /// Representative point for the alert area: the first vertex of the
    /// first ring. Deliberately not a centroid - downstream marker
    /// placement relies on this exact simplification.
    pub fn representative_point(&self) -> Option<LatLng> {
        let [lng, lat] = *self.coordinates.first()?.first()?;
        Some(LatLng { lat, lng })
    }
}

/// Geographic point, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Point-query response carrying the forecast-area indirection.
#[derive(Debug, Clone, Deserialize)]
pub struct PointMetadata {
    pub properties: PointProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointProperties {
    /// Region-specific feed endpoint for the queried point
    #[serde(rename = "forecastUrl")]
    pub forecast_url: String,
}
