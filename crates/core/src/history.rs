//! Read-side collaborators feeding the dashboard: outfit history and trends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{TrendError, WearError};
use crate::wear::WearRecord;

/// A frequently-worn item, as reported by the history service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopWornItem {
    pub item_id: String,
    pub name: String,
    pub wear_count: u32,
}

/// Historical wear data for one user.
#[async_trait]
pub trait OutfitHistory: Send + Sync {
    fn name(&self) -> &str;

    /// Wears recorded in the trailing seven days.
    async fn outfits_this_week(
        &self,
        user_id: &str,
    ) -> std::result::Result<Vec<WearRecord>, WearError>;

    /// The user's most-worn items, highest count first.
    async fn top_worn_items(
        &self,
        user_id: &str,
        limit: usize,
    ) -> std::result::Result<Vec<TopWornItem>, WearError>;
}

/// The trending-styles feed.
#[async_trait]
pub trait TrendService: Send + Sync {
    fn name(&self) -> &str;

    /// Currently trending style names, most popular first.
    async fn trending_styles(&self) -> std::result::Result<Vec<String>, TrendError>;
}
