//! Weather clients: the HTTP provider and the fallback wrapper.
//!
//! `HttpWeatherClient` talks to the weather API and returns live readings.
//! `FallbackWeather` wraps any provider and never fails: on error or timeout
//! it synthesizes a flagged fallback snapshot, and it stamps `is_stale` on
//! readings older than the freshness window.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use stylecast_core::error::WeatherError;
use stylecast_core::weather::{WeatherProvider, WeatherSnapshot};
use tracing::{debug, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// HTTP client for the weather API.
pub struct HttpWeatherClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpWeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, StdDuration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: StdDuration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
            client,
        }
    }
}

/// Wire format of the weather API's current-conditions endpoint.
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_f: f64,
    condition: String,
    humidity: u8,
    wind_speed_mph: f64,
    #[serde(default)]
    observed_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl WeatherProvider for HttpWeatherClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_by_location(
        &self,
        location: &str,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/current", self.base_url);
        debug!(%location, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("location", location)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    WeatherError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::UnknownLocation(location.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let conditions: CurrentConditions = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidPayload(e.to_string()))?;

        Ok(WeatherSnapshot {
            temperature_f: conditions.temperature_f,
            condition: conditions.condition,
            humidity: conditions.humidity,
            wind_speed_mph: conditions.wind_speed_mph,
            location: location.to_string(),
            is_fallback: false,
            is_stale: false,
            fetched_at: conditions.observed_at.unwrap_or_else(Utc::now),
        })
    }
}

/// A provider wrapper that never fails.
///
/// Wraps an inner provider with a timeout; error or expiry yields a
/// synthesized `is_fallback` snapshot so the orchestrator always has
/// weather to work with. Readings older than the freshness window are
/// flagged `is_stale` but still returned as-is.
pub struct FallbackWeather {
    inner: Arc<dyn WeatherProvider>,
    timeout: StdDuration,
    stale_after: Duration,
}

impl FallbackWeather {
    pub fn new(inner: Arc<dyn WeatherProvider>) -> Self {
        Self {
            inner,
            timeout: StdDuration::from_secs(DEFAULT_TIMEOUT_SECS),
            stale_after: Duration::minutes(60),
        }
    }

    pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }
}

#[async_trait]
impl WeatherProvider for FallbackWeather {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn fetch_by_location(
        &self,
        location: &str,
    ) -> Result<WeatherSnapshot, WeatherError> {
        match tokio::time::timeout(self.timeout, self.inner.fetch_by_location(location)).await
        {
            Ok(Ok(mut snapshot)) => {
                if Utc::now() - snapshot.fetched_at > self.stale_after {
                    debug!(%location, fetched_at = %snapshot.fetched_at, "Weather reading is stale");
                    snapshot.is_stale = true;
                }
                Ok(snapshot)
            }
            Ok(Err(e)) => {
                warn!(%location, error = %e, "Weather provider failed, using fallback snapshot");
                Ok(WeatherSnapshot::fallback(location))
            }
            Err(_) => {
                warn!(
                    %location,
                    timeout_secs = self.timeout.as_secs(),
                    "Weather provider timed out, using fallback snapshot"
                );
                Ok(WeatherSnapshot::fallback(location))
            }
        }
    }
}
