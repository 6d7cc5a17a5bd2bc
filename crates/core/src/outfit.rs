//! The generated daily outfit — the central record of this system.
//!
//! One outfit exists per (user, calendar day). It is created by the
//! orchestrator, persisted to the daily cache, flipped to worn in place,
//! and discarded on regenerate or ownership mismatch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::params::OutfitParameters;
use crate::wardrobe::{Category, WardrobeItem};
use crate::weather::WeatherSummary;

/// Confidence assigned to locally synthesized fallback outfits.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Default floor below which a cached outfit is treated as not usefully
/// generated. Overridable through configuration.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.2;

/// A garment reference inside a generated outfit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub color: String,
}

impl From<&WardrobeItem> for OutfitItem {
    fn from(item: &WardrobeItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            color: item.color.clone(),
        }
    }
}

/// The daily outfit recommendation for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedOutfit {
    /// Unique ID for this outfit.
    pub id: String,

    /// Display name ("Breezy layers for a clear morning").
    pub name: String,

    /// The garments making up the look. Empty on fallback outfits.
    pub items: Vec<OutfitItem>,

    /// The weather the outfit was generated against.
    pub weather: WeatherSummary,

    /// Why the service picked this look.
    pub reasoning: String,

    /// Service confidence in [0, 1]. Clamped on normalization.
    pub confidence: f64,

    /// When the outfit was generated.
    pub generated_at: DateTime<Utc>,

    /// Whether the user has worn this outfit today.
    #[serde(default)]
    pub is_worn: bool,

    /// When the wear was recorded, if it was.
    #[serde(default)]
    pub worn_at: Option<DateTime<Utc>>,

    /// True when the generation service failed and this outfit was
    /// synthesized locally as a placeholder.
    #[serde(default)]
    pub is_fallback: bool,

    /// The derived parameters the outfit was generated with. Absent on
    /// fallback outfits; echoed into wear records as metadata.
    #[serde(default)]
    pub parameters: Option<OutfitParameters>,

    /// The user this outfit belongs to. Validated on every cache read.
    pub owner_id: String,
}

impl GeneratedOutfit {
    /// Synthesize the deterministic placeholder cached when the generation
    /// service is unavailable, so the day still has a stable state.
    pub fn fallback(owner_id: impl Into<String>, weather: WeatherSummary) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Today's outfit".into(),
            items: Vec::new(),
            weather,
            reasoning: "The outfit service is temporarily unavailable. \
                        Try regenerating in a little while."
                .into(),
            confidence: FALLBACK_CONFIDENCE,
            generated_at: Utc::now(),
            is_worn: false,
            worn_at: None,
            is_fallback: true,
            parameters: None,
            owner_id: owner_id.into(),
        }
    }

    /// Whether this outfit counts as usefully generated.
    ///
    /// Zero items, the fallback marker, or sub-threshold confidence all
    /// disqualify it and trigger regeneration on the next read.
    pub fn is_usable(&self, min_confidence: f64) -> bool {
        !self.items.is_empty() && !self.is_fallback && self.confidence >= min_confidence
    }

    /// Flip to worn. One-way within a day; callers guard idempotence.
    pub fn mark_worn(&mut self, at: DateTime<Utc>) {
        self.is_worn = true;
        self.worn_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> WeatherSummary {
        WeatherSummary {
            temperature_f: 72.0,
            condition: "Clear".into(),
            location: "Chicago".into(),
        }
    }

    #[test]
    fn fallback_outfit_is_not_usable() {
        let outfit = GeneratedOutfit::fallback("user-1", summary());
        assert_eq!(outfit.confidence, FALLBACK_CONFIDENCE);
        assert!(outfit.items.is_empty());
        assert!(outfit.reasoning.contains("temporarily unavailable"));
        assert!(!outfit.is_usable(DEFAULT_MIN_CONFIDENCE));
    }

    #[test]
    fn usable_requires_items_and_confidence() {
        let mut outfit = GeneratedOutfit::fallback("user-1", summary());
        outfit.is_fallback = false;
        outfit.confidence = 0.9;
        // Still unusable: no items.
        assert!(!outfit.is_usable(DEFAULT_MIN_CONFIDENCE));

        outfit.items.push(OutfitItem {
            id: "w1".into(),
            name: "White tee".into(),
            category: Category::Tops,
            color: "white".into(),
        });
        assert!(outfit.is_usable(DEFAULT_MIN_CONFIDENCE));

        outfit.confidence = 0.1;
        assert!(!outfit.is_usable(DEFAULT_MIN_CONFIDENCE));
    }

    #[test]
    fn mark_worn_sets_timestamp() {
        let mut outfit = GeneratedOutfit::fallback("user-1", summary());
        let now = Utc::now();
        outfit.mark_worn(now);
        assert!(outfit.is_worn);
        assert_eq!(outfit.worn_at, Some(now));
    }
}
