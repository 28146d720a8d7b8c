//! Active-alert retrieval with TTL caching and graceful degradation

use std::time::Duration;

use crate::alerts::{parse_alerts, Alert};
use crate::cache::{CacheTtl, TtlCache};
use crate::client::AlertFeed;
use crate::error::Result;

/// Singleton cache key for the full active-alerts feed.
const ACTIVE_ALERTS_KEY: &str = "active_alerts";

/// Fetches and classifies NWS alerts.
///
/// Failures never surface to the caller: a failed refresh falls back to
/// the last successfully cached list (or an empty one), so the display
/// layer keeps rendering through transient network degradation.
pub struct AlertFetcher<C: AlertFeed> {
    client: C,
    cache: TtlCache<&'static str, Vec<Alert>>,
}

impl<C: AlertFeed> AlertFetcher<C> {
    pub fn new(client: C) -> Self {
        Self::with_ttl(client, CacheTtl::ALERTS)
    }

    /// Fetcher with a specific cache TTL (for tests).
    pub fn with_ttl(client: C, ttl: Duration) -> Self {
        Self {
            client,
            cache: TtlCache::new(ttl),
        }
    }

    /// Current active alerts, from cache when fresh.
    pub async fn fetch_active(&mut self) -> Vec<Alert> {
        if let Some(cached) = self.cache.get(&ACTIVE_ALERTS_KEY) {
            log::debug!("Cache hit: active alerts");
            return cached.clone();
        }

        match self.client.active_alerts().await {
            Ok(collection) => {
                let alerts = parse_alerts(&collection.features);
                self.cache.insert(ACTIVE_ALERTS_KEY, alerts.clone());
                alerts
            }
            Err(err) => {
                log::warn!("Failed to refresh active alerts: {}", err);
                self.cache
                    .stale(&ACTIVE_ALERTS_KEY)
                    .cloned()
                    .unwrap_or_default()
            }
        }
    }

    /// Alerts for the forecast area containing a point.
    ///
    /// No area-level cache to fall back to; failures return an empty list.
    pub async fn alerts_for_area(&self, lat: f64, lng: f64) -> Vec<Alert> {
        match self.area_alerts(lat, lng).await {
            Ok(alerts) => alerts,
            Err(err) => {
                log::warn!(
                    "Failed to fetch area alerts for {:.4},{:.4}: {}",
                    lat,
                    lng,
                    err
                );
                Vec::new()
            }
        }
    }

    async fn area_alerts(&self, lat: f64, lng: f64) -> Result<Vec<Alert>> {
        let point = self.client.point_metadata(lat, lng).await?;
        let collection = self
            .client
            .alerts_from(&point.properties.forecast_url)
            .await?;
        Ok(parse_alerts(&collection.features))
    }
}
