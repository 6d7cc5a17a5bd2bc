//! The wear-state synchronizer.
//!
//! Drives the one-way `unworn → worn` transition for a day's outfit:
//! tracker first, cache second, broadcasts last. A tracker failure aborts
//! the transition with nothing mutated. The second, delayed broadcast
//! carries `force_fresh` so listeners re-read past the aggregate store's
//! read-after-write lag.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use stylecast_core::error::{Error, Result};
use stylecast_core::event::{EventBus, OutfitEvent};
use stylecast_core::outfit::GeneratedOutfit;
use stylecast_core::user::UserProfile;
use stylecast_core::wear::{WearRecord, WearTracker};
use tracing::{debug, info};

use crate::cache::DailyOutfitCache;

const DEFAULT_REBROADCAST_DELAY: Duration = Duration::from_secs(5);

/// Marks outfits worn and keeps dependent views in sync.
pub struct WearSynchronizer {
    tracker: Arc<dyn WearTracker>,
    cache: DailyOutfitCache,
    events: Arc<EventBus>,
    rebroadcast_delay: Duration,
}

impl WearSynchronizer {
    pub fn new(
        tracker: Arc<dyn WearTracker>,
        cache: DailyOutfitCache,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            tracker,
            cache,
            events,
            rebroadcast_delay: DEFAULT_REBROADCAST_DELAY,
        }
    }

    /// Delay before the second, force-fresh broadcast.
    pub fn with_rebroadcast_delay(mut self, delay: Duration) -> Self {
        self.rebroadcast_delay = delay;
        self
    }

    /// Mark the day's outfit worn.
    ///
    /// Idempotent: an already-worn outfit is returned as-is with no second
    /// tracking call. With no cached outfit there is nothing to wear and the
    /// call fails with a precondition error.
    pub async fn wear(&self, user: &UserProfile, day: NaiveDate) -> Result<GeneratedOutfit> {
        let Some(mut outfit) = self.cache.read(user, day).await? else {
            return Err(Error::Precondition(format!(
                "no outfit cached for {day}; generate one first"
            )));
        };

        if outfit.is_worn {
            debug!(outfit_id = %outfit.id, "Outfit already worn today, ignoring");
            return Ok(outfit);
        }

        let now = Utc::now();
        let record = WearRecord::from_outfit(&outfit, now);

        // Tracker first. If this fails, nothing below runs and the cached
        // outfit stays unworn.
        self.tracker.mark_worn(&record).await?;

        outfit.mark_worn(now);
        let outfit = self.cache.write(user, day, outfit).await?;
        info!(outfit_id = %outfit.id, "Outfit marked worn");

        self.events.publish(OutfitEvent::MarkedWorn {
            outfit_id: outfit.id.clone(),
            outfit_name: outfit.name.clone(),
            timestamp: now,
            force_fresh: false,
        });

        // Delayed re-broadcast: weekly counters read an aggregate store that
        // can lag the write above; the force_fresh pass has them re-read.
        let events = Arc::clone(&self.events);
        let delay = self.rebroadcast_delay;
        let (outfit_id, outfit_name) = (outfit.id.clone(), outfit.name.clone());
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            events.publish(OutfitEvent::MarkedWorn {
                outfit_id,
                outfit_name,
                timestamp: Utc::now(),
                force_fresh: true,
            });
        });

        Ok(outfit)
    }
}
