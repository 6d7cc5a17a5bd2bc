//! The derived dashboard model.
//!
//! A read-side projection recomputed on every fetch; nothing here is
//! persisted. Every field has a zero/empty default so a dashboard can be
//! rendered even when every upstream source failed.

use serde::{Deserialize, Serialize};
use stylecast_core::history::TopWornItem;
use stylecast_core::outfit::GeneratedOutfit;

/// Item count for one garment category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub category: String,
    pub count: u32,
}

/// How urgent a wardrobe gap is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
}

/// A category with too few items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeGap {
    pub category: String,
    pub count: u32,
    pub priority: GapPriority,
    pub suggestion: String,
}

/// Per-season item counts and the balance verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalBalance {
    /// Combined coverage/evenness score in [0, 1].
    pub score: f64,
    pub spring: u32,
    pub summer: u32,
    pub fall: u32,
    pub winter: u32,
    pub status: String,
}

impl Default for SeasonalBalance {
    fn default() -> Self {
        Self {
            score: 0.0,
            spring: 0,
            summer: 0,
            fall: 0,
            winter: 0,
            status: "Add items to see seasonal coverage".into(),
        }
    }
}

/// The assembled dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardModel {
    pub total_items: u32,
    pub favorites: u32,
    pub style_goals: Vec<String>,
    pub outfits_this_week: u32,
    /// Weighted progress score as an integer percentage.
    pub overall_progress: u8,
    pub collections: Vec<CollectionSummary>,
    pub gaps: Vec<WardrobeGap>,
    pub top_items: Vec<TopWornItem>,
    pub trending_styles: Vec<String>,
    pub todays_outfit: Option<GeneratedOutfit>,
    #[serde(default)]
    pub seasonal_balance: SeasonalBalance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_fully_defined() {
        let model = DashboardModel::default();
        assert_eq!(model.total_items, 0);
        assert_eq!(model.overall_progress, 0);
        assert!(model.collections.is_empty());
        assert!(model.todays_outfit.is_none());
        assert!(!model.seasonal_balance.status.is_empty());
    }

    #[test]
    fn model_serializes() {
        let model = DashboardModel {
            total_items: 12,
            favorites: 3,
            ..DashboardModel::default()
        };
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"total_items\":12"));
    }
}
