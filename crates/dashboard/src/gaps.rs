//! Wardrobe gap analysis.
//!
//! Core categories with fewer than the threshold (default 3) items are
//! flagged: empty categories at High priority, thin ones at Medium.

use stylecast_core::wardrobe::{Category, WardrobeItem};

use crate::model::{GapPriority, WardrobeGap};

/// Find under-stocked core categories. High-priority gaps sort first.
pub fn find_gaps(items: &[WardrobeItem], threshold: u32) -> Vec<WardrobeGap> {
    let mut gaps: Vec<WardrobeGap> = Category::CORE
        .iter()
        .filter_map(|category| {
            let count = items.iter().filter(|i| &i.category == category).count() as u32;
            if count >= threshold {
                return None;
            }
            let (priority, suggestion) = if count == 0 {
                (
                    GapPriority::High,
                    format!("No {} yet — add a few staples", category.label().to_lowercase()),
                )
            } else {
                (
                    GapPriority::Medium,
                    format!(
                        "Only {} in {} — consider adding more",
                        count,
                        category.label().to_lowercase()
                    ),
                )
            };
            Some(WardrobeGap {
                category: category.label().to_string(),
                count,
                priority,
                suggestion,
            })
        })
        .collect();

    gaps.sort_by_key(|g| match g.priority {
        GapPriority::High => 0,
        GapPriority::Medium => 1,
    });
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items_in(category: Category, n: usize) -> Vec<WardrobeItem> {
        (0..n)
            .map(|i| WardrobeItem {
                id: format!("{category}-{i}"),
                name: format!("Item {i}"),
                category: category.clone(),
                color: "black".into(),
                wear_count: 0,
                is_favorite: false,
                diversity_score: 0.0,
            })
            .collect()
    }

    #[test]
    fn empty_wardrobe_flags_every_core_category_high() {
        let gaps = find_gaps(&[], 3);
        assert_eq!(gaps.len(), Category::CORE.len());
        assert!(gaps.iter().all(|g| g.priority == GapPriority::High));
        assert!(gaps.iter().all(|g| g.count == 0));
    }

    #[test]
    fn thin_category_is_medium_priority() {
        let mut items = items_in(Category::Tops, 2);
        items.extend(items_in(Category::Bottoms, 5));
        let gaps = find_gaps(&items, 3);

        let tops = gaps.iter().find(|g| g.category == "Tops").unwrap();
        assert_eq!(tops.priority, GapPriority::Medium);
        assert_eq!(tops.count, 2);
        assert!(tops.suggestion.contains("Only 2"));

        // Bottoms is stocked; not a gap.
        assert!(!gaps.iter().any(|g| g.category == "Bottoms"));
    }

    #[test]
    fn high_priority_gaps_sort_first() {
        let mut items = items_in(Category::Tops, 1);
        items.extend(items_in(Category::Bottoms, 3));
        items.extend(items_in(Category::Shoes, 3));
        items.extend(items_in(Category::Dresses, 3));
        items.extend(items_in(Category::Accessories, 3));
        // Outerwear: zero (High). Tops: one (Medium).
        let gaps = find_gaps(&items, 3);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].priority, GapPriority::High);
        assert_eq!(gaps[0].category, "Outerwear");
        assert_eq!(gaps[1].priority, GapPriority::Medium);
    }

    #[test]
    fn stocked_wardrobe_has_no_gaps() {
        let mut items = Vec::new();
        for category in Category::CORE {
            items.extend(items_in(category, 3));
        }
        assert!(find_gaps(&items, 3).is_empty());
    }
}
