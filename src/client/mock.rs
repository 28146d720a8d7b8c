//! Mock weather API clients for testing
//!
//! In-memory implementations of the client traits with scripted responses,
//! injectable failures, and call counters for cache-behavior assertions.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::models::{AlertCollection, AlertFeature, PointMetadata, PointProperties};
use super::{AlertFeed, RadarArchive};
use crate::error::{ApiError, Result};
use crate::radar::RadarProduct;

/// Call counts for the alert feed, for test verification
#[derive(Default, Debug, Clone)]
pub struct FeedCallCounts {
    pub active_alerts: usize,
    pub point_metadata: usize,
    pub alerts_from: usize,
}

/// Mock alert feed with scripted features and one-shot failures.
#[derive(Default)]
pub struct MockAlertFeed {
    features: Vec<AlertFeature>,
    point_url: Option<String>,
    /// Error returned by the next call, consumed on first use
    error: Mutex<Option<ApiError>>,
    call_counts: Mutex<FeedCallCounts>,
}

impl MockAlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_features(mut self, features: Vec<AlertFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn with_point_url(mut self, url: impl Into<String>) -> Self {
        self.point_url = Some(url.into());
        self
    }

    /// Make the next feed call fail with the given error.
    pub fn fail_next(&self, error: ApiError) {
        if let Ok(mut slot) = self.error.lock() {
            *slot = Some(error);
        }
    }

    pub fn call_counts(&self) -> FeedCallCounts {
        self.call_counts
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    fn take_error(&self) -> Option<ApiError> {
        self.error.lock().ok().and_then(|mut slot| slot.take())
    }
}

#[async_trait]
impl AlertFeed for MockAlertFeed {
    async fn active_alerts(&self) -> Result<AlertCollection> {
        if let Ok(mut counts) = self.call_counts.lock() {
            counts.active_alerts += 1;
        }
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(AlertCollection {
            features: self.features.clone(),
        })
    }

    async fn point_metadata(&self, _lat: f64, _lng: f64) -> Result<PointMetadata> {
        if let Ok(mut counts) = self.call_counts.lock() {
            counts.point_metadata += 1;
        }
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(PointMetadata {
            properties: PointProperties {
                forecast_url: self.point_url.clone().unwrap_or_default(),
            },
        })
    }

    async fn alerts_from(&self, _url: &str) -> Result<AlertCollection> {
        if let Ok(mut counts) = self.call_counts.lock() {
            counts.alerts_from += 1;
        }
        if let Some(err) = self.take_error() {
            return Err(err.into());
        }
        Ok(AlertCollection {
            features: self.features.clone(),
        })
    }
}

/// One captured radar fetch, for asserting which product a wrapper routed to.
#[derive(Debug, Clone)]
pub struct CapturedFetch {
    pub station: String,
    pub product: RadarProduct,
    pub elevation: f64,
}

/// Mock radar archive with per-call scripted failures and unavailability.
///
/// Calls are numbered from zero across `fetch_product` and `fetch_frame`;
/// indices listed in `fail_on` return a server error, indices in
/// `unavailable_on` report the slot missing.
pub struct MockRadarArchive {
    payload: Value,
    fail_on: HashSet<usize>,
    unavailable_on: HashSet<usize>,
    calls: Mutex<usize>,
    captured: Mutex<Vec<CapturedFetch>>,
}

impl MockRadarArchive {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            fail_on: HashSet::new(),
            unavailable_on: HashSet::new(),
            calls: Mutex::new(0),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_on(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.fail_on = indices.into_iter().collect();
        self
    }

    pub fn unavailable_on(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.unavailable_on = indices.into_iter().collect();
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or(0)
    }

    pub fn captured(&self) -> Vec<CapturedFetch> {
        self.captured
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    fn next_call(&self, station: &str, product: RadarProduct, elevation: f64) -> usize {
        let index = self
            .calls
            .lock()
            .map(|mut c| {
                let index = *c;
                *c += 1;
                index
            })
            .unwrap_or(0);
        if let Ok(mut captured) = self.captured.lock() {
            captured.push(CapturedFetch {
                station: station.to_string(),
                product,
                elevation,
            });
        }
        index
    }
}

#[async_trait]
impl RadarArchive for MockRadarArchive {
    async fn fetch_product(
        &self,
        station: &str,
        product: RadarProduct,
        elevation: f64,
    ) -> Result<Value> {
        let index = self.next_call(station, product, elevation);
        if self.fail_on.contains(&index) {
            return Err(ApiError::ServerError(format!("scripted failure at call {}", index)).into());
        }
        Ok(self.payload.clone())
    }

    async fn fetch_frame(
        &self,
        station: &str,
        product: RadarProduct,
        elevation: f64,
        _at: DateTime<Utc>,
    ) -> Result<Option<Value>> {
        let index = self.next_call(station, product, elevation);
        if self.fail_on.contains(&index) {
            return Err(ApiError::ServerError(format!("scripted failure at call {}", index)).into());
        }
        if self.unavailable_on.contains(&index) {
            return Ok(None);
        }
        Ok(Some(self.payload.clone()))
    }
}
