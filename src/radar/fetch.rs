//! Radar payload retrieval with an unbounded cache

use serde_json::Value;

use super::RadarProduct;
use crate::cache::{radar_cache_key, TtlCache};
use crate::client::RadarArchive;

/// Fetches radar payloads, memoized per (station, product, elevation).
///
/// A payload for a given tuple does not change once published, so the
/// cache never expires; [`RadarDataFetcher::clear_cache`] is the manual
/// invalidation hook.
pub struct RadarDataFetcher<C: RadarArchive> {
    client: C,
    cache: TtlCache<String, Value>,
}

impl<C: RadarArchive> RadarDataFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            cache: TtlCache::unbounded(),
        }
    }

    /// Payload for a station/product/elevation, or `None` on failure.
    pub async fn fetch(
        &mut self,
        station: &str,
        product: RadarProduct,
        elevation: f64,
    ) -> Option<Value> {
        let key = radar_cache_key(station, product, elevation);

        if let Some(cached) = self.cache.get(&key) {
            log::debug!("Cache hit: {}", key);
            return Some(cached.clone());
        }

        match self.client.fetch_product(station, product, elevation).await {
            Ok(data) => {
                self.cache.insert(key, data.clone());
                Some(data)
            }
            Err(err) => {
                log::warn!("Failed to fetch radar data for {}: {}", key, err);
                None
            }
        }
    }

    /// Base reflectivity.
    pub async fn reflectivity(&mut self, station: &str, elevation: f64) -> Option<Value> {
        self.fetch(station, RadarProduct::Reflectivity, elevation).await
    }

    /// Radial velocity.
    pub async fn velocity(&mut self, station: &str, elevation: f64) -> Option<Value> {
        self.fetch(station, RadarProduct::Velocity, elevation).await
    }

    pub async fn spectrum_width(&mut self, station: &str, elevation: f64) -> Option<Value> {
        self.fetch(station, RadarProduct::SpectrumWidth, elevation).await
    }

    pub async fn differential_reflectivity(
        &mut self,
        station: &str,
        elevation: f64,
    ) -> Option<Value> {
        self.fetch(station, RadarProduct::DifferentialReflectivity, elevation)
            .await
    }

    pub async fn correlation_coefficient(
        &mut self,
        station: &str,
        elevation: f64,
    ) -> Option<Value> {
        self.fetch(station, RadarProduct::CorrelationCoefficient, elevation)
            .await
    }

    /// Drop every cached payload unconditionally.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
