//! Overall style-progress scoring.
//!
//! A weighted sum of four sub-scores, reported as an integer percentage.
//! The weights are business constants carried in `DashboardConfig`
//! (0.2 goals / 0.3 size / 0.25 color / 0.25 seasonal by default).

use stylecast_config::DashboardConfig;
use stylecast_core::wardrobe::WardrobeItem;

/// Distinct colors needed for full color-variety marks.
const FULL_VARIETY_COLORS: usize = 10;

/// Fraction of style goals with at least one matching item.
///
/// A goal matches an item when any goal word of four letters or more
/// appears in the item's name, color, or category label. No goals set
/// means nothing is missing, which counts as full coverage.
pub fn style_goal_coverage(items: &[WardrobeItem], goals: &[String]) -> f64 {
    if goals.is_empty() {
        return 1.0;
    }

    let covered = goals
        .iter()
        .filter(|goal| {
            goal.to_lowercase()
                .split_whitespace()
                .filter(|word| word.len() >= 4)
                .any(|word| {
                    items.iter().any(|item| {
                        item.name.to_lowercase().contains(word)
                            || item.color.to_lowercase().contains(word)
                            || item.category.label().to_lowercase().contains(word)
                    })
                })
        })
        .count();

    covered as f64 / goals.len() as f64
}

/// Wardrobe size relative to the user's target, capped at 1.
pub fn wardrobe_size_ratio(item_count: usize, target: u32) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (item_count as f64 / target as f64).min(1.0)
}

/// Distinct colors relative to a ten-color spread, capped at 1.
pub fn color_variety_score(items: &[WardrobeItem]) -> f64 {
    let mut colors: Vec<String> = items
        .iter()
        .map(|i| i.color.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();
    colors.sort();
    colors.dedup();
    (colors.len() as f64 / FULL_VARIETY_COLORS as f64).min(1.0)
}

/// The weighted overall progress, rounded to the nearest integer percent.
pub fn overall_progress(
    config: &DashboardConfig,
    goal_coverage: f64,
    size_ratio: f64,
    color_variety: f64,
    seasonal_score: f64,
) -> u8 {
    let weighted = config.style_goal_weight * goal_coverage
        + config.wardrobe_size_weight * size_ratio
        + config.color_variety_weight * color_variety
        + config.seasonal_balance_weight * seasonal_score;
    (weighted * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecast_core::wardrobe::Category;

    fn item(name: &str, color: &str) -> WardrobeItem {
        WardrobeItem {
            id: "x".into(),
            name: name.into(),
            category: Category::Tops,
            color: color.into(),
            wear_count: 0,
            is_favorite: false,
            diversity_score: 0.0,
        }
    }

    #[test]
    fn no_goals_is_full_coverage() {
        assert_eq!(style_goal_coverage(&[], &[]), 1.0);
    }

    #[test]
    fn goal_matches_on_color_word() {
        let items = vec![item("Silk blouse", "coral")];
        let goals = vec!["more coral pieces".to_string()];
        assert_eq!(style_goal_coverage(&items, &goals), 1.0);
    }

    #[test]
    fn unmatched_goal_counts_against_coverage() {
        let items = vec![item("White tee", "white")];
        let goals = vec!["linen everything".to_string(), "white basics".to_string()];
        assert_eq!(style_goal_coverage(&items, &goals), 0.5);
    }

    #[test]
    fn size_ratio_caps_at_one() {
        assert_eq!(wardrobe_size_ratio(100, 50), 1.0);
        assert_eq!(wardrobe_size_ratio(25, 50), 0.5);
        assert_eq!(wardrobe_size_ratio(10, 0), 1.0);
    }

    #[test]
    fn color_variety_counts_distinct_colors() {
        let items = vec![
            item("A", "navy"),
            item("B", "Navy"), // same color, different case
            item("C", "white"),
        ];
        assert_eq!(color_variety_score(&items), 0.2);
    }

    #[test]
    fn overall_progress_weights_and_rounds() {
        let config = DashboardConfig::default();
        // 0.2*1.0 + 0.3*0.5 + 0.25*0.2 + 0.25*0.8 = 0.60
        assert_eq!(overall_progress(&config, 1.0, 0.5, 0.2, 0.8), 60);
    }

    #[test]
    fn overall_progress_bounds() {
        let config = DashboardConfig::default();
        assert_eq!(overall_progress(&config, 0.0, 0.0, 0.0, 0.0), 0);
        assert_eq!(overall_progress(&config, 1.0, 1.0, 1.0, 1.0), 100);
    }
}
