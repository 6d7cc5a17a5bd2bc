//! HTTP client for the wardrobe catalog.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use stylecast_core::error::CatalogError;
use stylecast_core::wardrobe::{WardrobeCatalog, WardrobeItem};
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Authenticated client for `GET {base}/wardrobe`.
pub struct HttpWardrobeClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl HttpWardrobeClient {
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

/// Wire format of the wardrobe listing endpoint.
#[derive(Debug, Deserialize)]
struct WardrobeListing {
    #[serde(default)]
    items: Vec<WardrobeItem>,
}

#[async_trait]
impl WardrobeCatalog for HttpWardrobeClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>, CatalogError> {
        let url = format!("{}/wardrobe", self.base_url);
        debug!(%user_id, "Fetching wardrobe catalog");

        let mut request = self.client.get(&url).query(&[("user_id", user_id)]);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(CatalogError::Unauthorized(user_id.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let listing: WardrobeListing = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidPayload(e.to_string()))?;

        debug!(%user_id, count = listing.items.len(), "Wardrobe fetched");
        Ok(listing.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_tolerates_missing_items_field() {
        let listing: WardrobeListing = serde_json::from_str("{}").unwrap();
        assert!(listing.items.is_empty());
    }

    #[test]
    fn listing_parses_items() {
        let listing: WardrobeListing = serde_json::from_str(
            r#"{"items":[{"id":"w1","name":"Denim jacket","category":"outerwear","color":"blue","wear_count":4,"is_favorite":true,"diversity_score":0.8}]}"#,
        )
        .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "Denim jacket");
        assert!(listing.items[0].is_favorite);
    }

    #[test]
    fn token_builder_sets_auth() {
        let client = HttpWardrobeClient::new("https://api.example.com/").with_token("tok");
        assert_eq!(client.base_url, "https://api.example.com");
        assert_eq!(client.api_token.as_deref(), Some("tok"));
    }
}
