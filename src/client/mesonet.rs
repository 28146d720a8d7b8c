//! Iowa Mesonet radar archive client

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::RadarArchive;
use crate::error::{ApiError, Result};
use crate::radar::RadarProduct;

/// Mesonet JSON service base URL
const API_BASE_URL: &str = "https://mesonet.agron.iastate.edu/json/";

/// Compacted timestamp accepted by the archive, e.g. `20240315T180500`
const ARCHIVE_TS_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Radar archive client
pub struct MesonetClient {
    http: HttpClient,
    base_url: String,
}

impl MesonetClient {
    /// Client against the production mesonet service.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Client against a specific base URL, trailing slash included (for
    /// tests against a local mock server).
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.http.get(url).send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<Value>().await.map_err(|e| {
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
impl RadarArchive for MesonetClient {
    async fn fetch_product(
        &self,
        station: &str,
        product: RadarProduct,
        _elevation: f64,
    ) -> Result<Value> {
        // Elevation selects the cache slot, not the request; the service
        // serves the base tilt per product
        let url = format!(
            "{}radarserver.py?station={}&type={}",
            self.base_url,
            station,
            product.as_str()
        );
        self.get_json(&url).await
    }

    async fn fetch_frame(
        &self,
        station: &str,
        product: RadarProduct,
        _elevation: f64,
        at: DateTime<Utc>,
    ) -> Result<Option<Value>> {
        let url = format!(
            "{}radarserver.py?station={}&type={}&ts={}",
            self.base_url,
            station,
            product.as_str(),
            at.format(ARCHIVE_TS_FORMAT)
        );

        // A missing archive slot is a hole in the history, not a failure
        match self.get_json(&url).await {
            Ok(data) => Ok(Some(data)),
            Err(crate::error::Error::Api(ApiError::NotFound(_))) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
