//! Wear tracking — the collaborator that records an outfit actually worn.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WearError;
use crate::outfit::GeneratedOutfit;
use crate::params::{Mood, Occasion};
use crate::weather::WeatherSummary;

/// One recorded wear of an outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearRecord {
    /// The outfit that was worn.
    pub outfit_id: String,

    /// The item ids making up the outfit at wear time.
    pub item_ids: Vec<String>,

    /// When the wear happened.
    pub worn_at: DateTime<Utc>,

    /// Occasion metadata, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,

    /// Mood metadata, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,

    /// The weather at wear time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSummary>,

    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Tags for later filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl WearRecord {
    /// Build a record from a cached outfit at the moment of wearing.
    /// Occasion/mood metadata is echoed from the generation parameters.
    pub fn from_outfit(outfit: &GeneratedOutfit, worn_at: DateTime<Utc>) -> Self {
        Self {
            outfit_id: outfit.id.clone(),
            item_ids: outfit.items.iter().map(|i| i.id.clone()).collect(),
            worn_at,
            occasion: outfit.parameters.map(|p| p.occasion),
            mood: outfit.parameters.map(|p| p.mood),
            weather: Some(outfit.weather.clone()),
            notes: None,
            tags: vec!["daily_outfit".into()],
        }
    }

    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }
}

/// The wear tracking collaborator.
///
/// Failure here must abort the worn transition: the synchronizer commits
/// no state until the tracker acknowledges.
#[async_trait]
pub trait WearTracker: Send + Sync {
    fn name(&self) -> &str;

    /// Record one wear. Ack-or-error; no partial success.
    async fn mark_worn(&self, record: &WearRecord) -> std::result::Result<(), WearError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outfit::GeneratedOutfit;
    use crate::weather::WeatherSummary;

    #[test]
    fn record_from_outfit_collects_item_ids() {
        let mut outfit = GeneratedOutfit::fallback(
            "user-1",
            WeatherSummary {
                temperature_f: 60.0,
                condition: "Overcast".into(),
                location: "Seattle".into(),
            },
        );
        outfit.items.push(crate::outfit::OutfitItem {
            id: "w1".into(),
            name: "Rain shell".into(),
            category: crate::wardrobe::Category::Outerwear,
            color: "yellow".into(),
        });

        let record = WearRecord::from_outfit(&outfit, Utc::now());
        assert_eq!(record.outfit_id, outfit.id);
        assert_eq!(record.item_ids, vec!["w1".to_string()]);
        assert!(record.weather.is_some());
        assert_eq!(record.tags, vec!["daily_outfit".to_string()]);
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let record = WearRecord {
            outfit_id: "o1".into(),
            item_ids: vec![],
            worn_at: Utc::now(),
            occasion: None,
            mood: None,
            weather: None,
            notes: None,
            tags: vec![],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("occasion"));
        assert!(!json.contains("notes"));
        assert!(!json.contains("tags"));
    }
}
