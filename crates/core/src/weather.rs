//! Weather snapshot types and the provider trait.
//!
//! A `WeatherSnapshot` is what the rest of the system reasons about: it may
//! be a live reading, a stale one, or a synthesized fallback — the flags say
//! which, and downstream code treats all three uniformly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// A point-in-time weather reading for one location.
///
/// Temperatures are Fahrenheit; wind is mph. The mapper's bucketing
/// thresholds assume these units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in °F.
    pub temperature_f: f64,

    /// Free-form condition text from the provider ("Clear", "Light rain", ...).
    pub condition: String,

    /// Relative humidity, 0–100.
    pub humidity: u8,

    /// Wind speed in mph.
    pub wind_speed_mph: f64,

    /// The location this reading describes.
    pub location: String,

    /// True when the provider could not be reached and this snapshot was
    /// synthesized locally.
    #[serde(default)]
    pub is_fallback: bool,

    /// True when the reading is older than the freshness window.
    #[serde(default)]
    pub is_stale: bool,

    /// When the reading was taken (or synthesized).
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// A deterministic placeholder used when the provider is unreachable.
    /// Mild, dry defaults so the mapper lands in an inoffensive bucket.
    pub fn fallback(location: impl Into<String>) -> Self {
        Self {
            temperature_f: 68.0,
            condition: "Partly cloudy".into(),
            humidity: 50,
            wind_speed_mph: 5.0,
            location: location.into(),
            is_fallback: true,
            is_stale: false,
            fetched_at: Utc::now(),
        }
    }

    /// Compact form embedded in outfits and wear records.
    pub fn summary(&self) -> WeatherSummary {
        WeatherSummary {
            temperature_f: self.temperature_f,
            condition: self.condition.clone(),
            location: self.location.clone(),
        }
    }
}

/// The slice of a snapshot worth persisting alongside an outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature_f: f64,
    pub condition: String,
    pub location: String,
}

/// The weather collaborator.
///
/// Implementations: HTTP client, fallback wrapper, in-memory stub (tests).
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// A human-readable name for this provider (e.g., "http", "fallback").
    fn name(&self) -> &str;

    /// Fetch the current weather for a location.
    async fn fetch_by_location(
        &self,
        location: &str,
    ) -> std::result::Result<WeatherSnapshot, WeatherError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_snapshot_is_flagged() {
        let snap = WeatherSnapshot::fallback("Portland");
        assert!(snap.is_fallback);
        assert!(!snap.is_stale);
        assert_eq!(snap.location, "Portland");
    }

    #[test]
    fn summary_carries_condition_and_location() {
        let snap = WeatherSnapshot::fallback("Austin");
        let summary = snap.summary();
        assert_eq!(summary.location, "Austin");
        assert_eq!(summary.condition, "Partly cloudy");
    }

    #[test]
    fn snapshot_serialization_roundtrip() {
        let snap = WeatherSnapshot::fallback("Denver");
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: WeatherSnapshot = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_fallback);
        assert_eq!(parsed.location, "Denver");
    }
}
