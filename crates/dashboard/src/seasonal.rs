//! Seasonal balance scoring.
//!
//! Each item maps to one season — garment-name keywords first, category
//! default otherwise. The balance score weighs "seasons represented" and
//! distribution evenness (min/max ratio across the four buckets) equally.

use stylecast_core::wardrobe::{Category, WardrobeItem};

use crate::model::SeasonalBalance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

const WINTER_KEYWORDS: &[&str] = &[
    "coat", "parka", "puffer", "sweater", "wool", "fleece", "beanie", "scarf", "boot", "thermal",
];
const SUMMER_KEYWORDS: &[&str] = &["shorts", "tank", "sandal", "linen", "swim"];
const SPRING_KEYWORDS: &[&str] = &["raincoat", "trench", "windbreaker", "cardigan"];
const FALL_KEYWORDS: &[&str] = &["flannel", "corduroy", "hoodie", "denim", "jacket"];

/// Which season an item counts toward.
pub fn season_for(item: &WardrobeItem) -> Season {
    let name = item.name.to_lowercase();

    if WINTER_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Season::Winter;
    }
    if SUMMER_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Season::Summer;
    }
    if SPRING_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Season::Spring;
    }
    if FALL_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Season::Fall;
    }

    match item.category {
        Category::Outerwear => Season::Winter,
        Category::Dresses => Season::Summer,
        Category::Bottoms | Category::Shoes => Season::Fall,
        Category::Tops | Category::Accessories | Category::Other(_) => Season::Spring,
    }
}

/// Score the wardrobe's seasonal spread.
pub fn seasonal_balance(items: &[WardrobeItem]) -> SeasonalBalance {
    if items.is_empty() {
        return SeasonalBalance::default();
    }

    let mut counts = [0u32; 4];
    for item in items {
        let idx = match season_for(item) {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        };
        counts[idx] += 1;
    }

    let represented = counts.iter().filter(|&&c| c > 0).count();
    let coverage = represented as f64 / 4.0;

    let min = *counts.iter().min().unwrap_or(&0);
    let max = *counts.iter().max().unwrap_or(&0);
    let evenness = if max == 0 { 0.0 } else { min as f64 / max as f64 };

    let score = 0.5 * coverage + 0.5 * evenness;
    let any_missing = counts.iter().any(|&c| c == 0);

    let status = if any_missing {
        "Gaps in seasonal coverage".into()
    } else if score >= 0.75 {
        "Well balanced across seasons".into()
    } else if score >= 0.5 {
        "Reasonably balanced".into()
    } else {
        "Skewed toward one season".into()
    };

    SeasonalBalance {
        score,
        spring: counts[0],
        summer: counts[1],
        fall: counts[2],
        winter: counts[3],
        status,
    }
}
