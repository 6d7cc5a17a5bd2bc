//! HTTP client for the trending-styles feed.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use stylecast_core::error::TrendError;
use stylecast_core::history::TrendService;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for `GET {base}/trending`.
pub struct HttpTrendClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTrendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TrendListing {
    #[serde(default)]
    styles: Vec<String>,
}

#[async_trait]
impl TrendService for HttpTrendClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn trending_styles(&self) -> Result<Vec<String>, TrendError> {
        let url = format!("{}/trending", self.base_url);
        debug!("Fetching trending styles");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TrendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let listing: TrendListing = response
            .json()
            .await
            .map_err(|e| TrendError::Network(format!("malformed trend payload: {e}")))?;

        Ok(listing.styles)
    }
}
