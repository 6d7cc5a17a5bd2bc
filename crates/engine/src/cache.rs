//! The daily outfit cache.
//!
//! One entry per calendar day, stored as JSON through the injected
//! `KeyValueStore`. The key is the day alone; the owning user id travels
//! inside the entry and is validated on every read, so a user switch on the
//! same device surfaces as a cache miss instead of leaking the previous
//! account's outfit.

use chrono::NaiveDate;
use std::sync::Arc;
use stylecast_core::error::Result;
use stylecast_core::outfit::GeneratedOutfit;
use stylecast_core::store::KeyValueStore;
use stylecast_core::user::UserProfile;
use tracing::{debug, warn};

/// Cache over a key-value store. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct DailyOutfitCache {
    store: Arc<dyn KeyValueStore>,
}

impl DailyOutfitCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(day: NaiveDate) -> String {
        format!("daily_outfit:{day}")
    }

    /// Read the day's outfit for this user.
    ///
    /// Returns `None` when there is no entry, when the stored entry is
    /// corrupt, or when it belongs to a different user — the latter two are
    /// removed on the spot.
    pub async fn read(&self, user: &UserProfile, day: NaiveDate) -> Result<Option<GeneratedOutfit>> {
        let key = Self::key(day);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(None);
        };

        let outfit: GeneratedOutfit = match serde_json::from_str(&raw) {
            Ok(outfit) => outfit,
            Err(e) => {
                warn!(%key, error = %e, "Discarding corrupt cached outfit");
                self.store.remove(&key).await?;
                return Ok(None);
            }
        };

        if outfit.owner_id != user.id {
            warn!(
                %key,
                cached_owner = %outfit.owner_id,
                active_user = %user.id,
                "Cached outfit belongs to a different user, discarding"
            );
            self.store.remove(&key).await?;
            return Ok(None);
        }

        Ok(Some(outfit))
    }

    /// Persist the day's outfit, stamping ownership first.
    pub async fn write(
        &self,
        user: &UserProfile,
        day: NaiveDate,
        mut outfit: GeneratedOutfit,
    ) -> Result<GeneratedOutfit> {
        outfit.owner_id = user.id.clone();
        let raw = serde_json::to_string(&outfit)?;
        self.store.set(&Self::key(day), raw).await?;
        debug!(day = %day, outfit_id = %outfit.id, "Cached daily outfit");
        Ok(outfit)
    }

    /// Remove the day's entry. Missing entries are fine.
    pub async fn clear(&self, day: NaiveDate) -> Result<()> {
        self.store.remove(&Self::key(day)).await?;
        Ok(())
    }
}
