//! Remote weather API clients
//!
//! Two upstream boundaries: the NWS alert feed (api.weather.gov) and the
//! mesonet radar archive. Both are modeled as async traits so fetchers can
//! be exercised against mocks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Result;
use crate::radar::RadarProduct;

#[cfg(test)]
pub mod fixtures;
pub mod mesonet;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod nws;

pub use mesonet::MesonetClient;
#[cfg(test)]
pub use mock::{MockAlertFeed, MockRadarArchive};
pub use models::{
    AlertCollection, AlertFeature, AlertProperties, Geometry, LatLng, PointMetadata,
    PointProperties,
};
pub use nws::NwsClient;

/// Active-alert feed boundary.
#[async_trait]
pub trait AlertFeed: Send + Sync {
    /// Fetch the full active-alerts feed.
    async fn active_alerts(&self) -> Result<AlertCollection>;

    /// Resolve a geographic point to its forecast-area metadata.
    async fn point_metadata(&self, lat: f64, lng: f64) -> Result<PointMetadata>;

    /// Fetch an alert collection from an absolute feed URL (the second hop
    /// of an area query).
    async fn alerts_from(&self, url: &str) -> Result<AlertCollection>;
}

/// Radar archive boundary.
#[async_trait]
pub trait RadarArchive: Send + Sync {
    /// Fetch the current payload for a station/product/elevation. The
    /// payload is opaque to this subsystem.
    async fn fetch_product(
        &self,
        station: &str,
        product: RadarProduct,
        elevation: f64,
    ) -> Result<Value>;

    /// Fetch the payload for one archived time slot. `Ok(None)` means the
    /// archive has no data for that slot, which is not an error.
    async fn fetch_frame(
        &self,
        station: &str,
        product: RadarProduct,
        elevation: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<Value>>;
}
