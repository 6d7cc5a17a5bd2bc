//! # StyleCast Dashboard
//!
//! The read-side projection: five backend summaries fetched concurrently
//! and folded into a `DashboardModel` with heuristic scoring. Stateless —
//! recomputed on every fetch, nothing persisted.

pub mod aggregator;
pub mod gaps;
pub mod model;
pub mod progress;
pub mod seasonal;

pub use aggregator::DashboardAggregator;
pub use model::{
    CollectionSummary, DashboardModel, GapPriority, SeasonalBalance, WardrobeGap,
};
pub use seasonal::{season_for, seasonal_balance, Season};
