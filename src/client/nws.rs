//! NWS api.weather.gov client

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{AlertCollection, PointMetadata};
use super::AlertFeed;
use crate::error::{ApiError, Result};

/// NWS API base URL
const API_BASE_URL: &str = "https://api.weather.gov/";

/// api.weather.gov rejects requests without an identifying User-Agent
const USER_AGENT: &str = concat!("nexview/", env!("CARGO_PKG_VERSION"));

/// Courtesy limit; the NWS throttles aggressive clients
const RATE_LIMIT_PER_SECOND: u32 = 5;

/// NWS alert feed client
pub struct NwsClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl NwsClient {
    /// Client against the production NWS API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Client against a specific base URL, trailing slash included (for
    /// tests against a local mock server).
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url,
            rate_limiter,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        // Apply rate limiting
        self.rate_limiter.until_ready().await;

        let response = self.http.get(url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            s if s.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl AlertFeed for NwsClient {
    async fn active_alerts(&self) -> Result<AlertCollection> {
        let url = format!("{}alerts/active", self.base_url);
        self.get_json(&url).await
    }

    async fn point_metadata(&self, lat: f64, lng: f64) -> Result<PointMetadata> {
        // Coordinates are truncated to four decimal places; the API
        // redirects anything more precise
        let url = format!("{}points/{:.4},{:.4}", self.base_url, lat, lng);
        self.get_json(&url).await
    }

    async fn alerts_from(&self, url: &str) -> Result<AlertCollection> {
        self.get_json(url).await
    }
}
