//! HTTP client for the wear history service.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use stylecast_core::error::WearError;
use stylecast_core::history::{OutfitHistory, TopWornItem};
use stylecast_core::wear::WearRecord;
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the history endpoints (`GET {base}/wear/week`,
/// `GET {base}/wear/top`).
pub struct HttpHistoryClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl HttpHistoryClient {
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

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, WearError> {
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| WearError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WearError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| WearError::Network(format!("malformed history payload: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct WeekListing {
    #[serde(default)]
    wears: Vec<WearRecord>,
}

#[derive(Debug, Deserialize)]
struct TopListing {
    #[serde(default)]
    items: Vec<TopWornItem>,
}

#[async_trait]
impl OutfitHistory for HttpHistoryClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn outfits_this_week(&self, user_id: &str) -> Result<Vec<WearRecord>, WearError> {
        debug!(%user_id, "Fetching weekly wear history");
        let listing: WeekListing = self
            .get_json(
                format!("{}/wear/week", self.base_url),
                &[("user_id", user_id.to_string())],
            )
            .await?;
        Ok(listing.wears)
    }

    async fn top_worn_items(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<TopWornItem>, WearError> {
        debug!(%user_id, limit, "Fetching top-worn items");
        let listing: TopListing = self
            .get_json(
                format!("{}/wear/top", self.base_url),
                &[
                    ("user_id", user_id.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(listing.items)
    }
}
