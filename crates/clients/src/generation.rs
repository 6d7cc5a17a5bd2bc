//! HTTP client for the outfit generation service.
//!
//! The orchestrator wraps calls to this client in its own bounded timeout;
//! the reqwest-level timeout here is a backstop against hung sockets.

use async_trait::async_trait;
use std::time::Duration;
use stylecast_core::error::GenerationError;
use stylecast_core::generation::{GenerationRequest, GenerationResponse, GenerationService};
use tracing::debug;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for `POST {base}/generate`.
pub struct HttpGenerationClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl HttpGenerationClient {
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
impl GenerationService for HttpGenerationClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let url = format!("{}/generate", self.base_url);
        debug!(
            occasion = %request.parameters.occasion,
            style = %request.parameters.style,
            mood = %request.parameters.mood,
            wardrobe_items = request.wardrobe.len(),
            "Requesting outfit generation"
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                }
            } else {
                GenerationError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let generated: GenerationResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidPayload(e.to_string()))?;

        if generated.name.is_empty() {
            return Err(GenerationError::InvalidPayload(
                "generation response missing outfit name".into(),
            ));
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_and_stores_token() {
        let client = HttpGenerationClient::new("https://api.example.com/v1/").with_token("t");
        assert_eq!(client.base_url, "https://api.example.com/v1");
        assert_eq!(client.api_token.as_deref(), Some("t"));
    }

    #[test]
    fn response_with_out_of_range_confidence_still_parses() {
        // Clamping is the orchestrator's job; the client only validates shape.
        let parsed: GenerationResponse = serde_json::from_str(
            r#"{"name":"Heatwave look","items":[],"reasoning":"light layers","confidence":1.7}"#,
        )
        .unwrap();
        assert_eq!(parsed.confidence, 1.7);
    }
}
