//! The dashboard aggregator.
//!
//! Fetches five sources concurrently — wardrobe, weekly history, trending
//! styles, today's suggestion, top-worn items — and folds them into one
//! `DashboardModel`. Every source degrades independently to an empty/zero
//! default; the aggregation itself never fails.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use stylecast_config::DashboardConfig;
use stylecast_core::history::{OutfitHistory, TrendService};
use stylecast_core::user::UserProfile;
use stylecast_core::wardrobe::{Category, WardrobeCatalog};
use stylecast_engine::DailyOutfitCache;
use tracing::warn;

use crate::gaps::find_gaps;
use crate::model::{CollectionSummary, DashboardModel};
use crate::progress::{
    color_variety_score, overall_progress, style_goal_coverage, wardrobe_size_ratio,
};
use crate::seasonal::seasonal_balance;

/// Stateless read-side projection over the user's data.
pub struct DashboardAggregator {
    catalog: Arc<dyn WardrobeCatalog>,
    history: Arc<dyn OutfitHistory>,
    trends: Arc<dyn TrendService>,
    cache: DailyOutfitCache,
    config: DashboardConfig,
}

impl DashboardAggregator {
    pub fn new(
        catalog: Arc<dyn WardrobeCatalog>,
        history: Arc<dyn OutfitHistory>,
        trends: Arc<dyn TrendService>,
        cache: DailyOutfitCache,
        config: DashboardConfig,
    ) -> Self {
        Self {
            catalog,
            history,
            trends,
            cache,
            config,
        }
    }

    /// Assemble the dashboard for one user and day.
    ///
    /// The five fetches run concurrently and are jointly awaited; a failure
    /// in one degrades that slice to its default without touching the rest.
    pub async fn assemble(&self, user: &UserProfile, day: NaiveDate) -> DashboardModel {
        let (items, week, trending, todays_outfit, top_items) = tokio::join!(
            async {
                self.catalog.list_items(&user.id).await.unwrap_or_else(|e| {
                    warn!(error = %e, "Wardrobe fetch failed, dashboard shows empty catalog");
                    Vec::new()
                })
            },
            async {
                self.history
                    .outfits_this_week(&user.id)
                    .await
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "History fetch failed, weekly count shows zero");
                        Vec::new()
                    })
            },
            async {
                self.trends.trending_styles().await.unwrap_or_else(|e| {
                    warn!(error = %e, "Trend fetch failed, dashboard shows no trends");
                    Vec::new()
                })
            },
            async {
                self.cache.read(user, day).await.unwrap_or_else(|e| {
                    warn!(error = %e, "Cache read failed, dashboard shows no suggestion");
                    None
                })
            },
            async {
                self.history
                    .top_worn_items(&user.id, self.config.top_items)
                    .await
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "Top-worn fetch failed, dashboard shows none");
                        Vec::new()
                    })
            },
        );

        let favorites = items.iter().filter(|i| i.is_favorite).count() as u32;

        let mut per_category: HashMap<String, u32> = HashMap::new();
        for item in &items {
            *per_category.entry(item.category.label().to_string()).or_insert(0) += 1;
        }
        let mut collections: Vec<CollectionSummary> = Category::CORE
            .iter()
            .filter_map(|category| {
                per_category.get(category.label()).map(|&count| CollectionSummary {
                    category: category.label().to_string(),
                    count,
                })
            })
            .collect();
        // Categories outside the core set still show up, after the core ones.
        let mut extras: Vec<CollectionSummary> = per_category
            .iter()
            .filter(|(label, _)| !Category::CORE.iter().any(|c| c.label() == label.as_str()))
            .map(|(label, &count)| CollectionSummary {
                category: label.clone(),
                count,
            })
            .collect();
        extras.sort_by(|a, b| a.category.cmp(&b.category));
        collections.append(&mut extras);

        let seasonal = seasonal_balance(&items);
        let gaps = find_gaps(&items, self.config.gap_threshold);

        let progress = overall_progress(
            &self.config,
            style_goal_coverage(&items, &user.style_goals),
            wardrobe_size_ratio(items.len(), user.wardrobe_size_target),
            color_variety_score(&items),
            seasonal.score,
        );

        DashboardModel {
            total_items: items.len() as u32,
            favorites,
            style_goals: user.style_goals.clone(),
            outfits_this_week: week.len() as u32,
            overall_progress: progress,
            collections,
            gaps,
            top_items,
            trending_styles: trending,
            todays_outfit,
            seasonal_balance: seasonal,
        }
    }
}
