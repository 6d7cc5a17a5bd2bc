//! HTTP client for the wear tracking service.

use async_trait::async_trait;
use std::time::Duration;
use stylecast_core::error::WearError;
use stylecast_core::wear::{WearRecord, WearTracker};
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for `POST {base}/wear`.
pub struct HttpWearClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl HttpWearClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            client,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

#[async_trait]
impl WearTracker for HttpWearClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn mark_worn(&self, record: &WearRecord) -> Result<(), WearError> {
        let url = format!("{}/wear", self.base_url);
        debug!(outfit_id = %record.outfit_id, items = record.item_ids.len(), "Recording wear");

        let mut builder = self.client.post(&url).json(record);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| WearError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WearError::OutfitNotFound(record.outfit_id.clone()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WearError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
