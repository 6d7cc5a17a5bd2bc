//! Outfit event channel — cross-view notification without coupling.
//!
//! When wear-state changes, independent views (weekly counters, dashboards)
//! need to refresh. Events are published on a broadcast channel; delivery is
//! best-effort, multi-subscriber, and unacknowledged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// All outfit lifecycle events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutfitEvent {
    /// A daily outfit was generated (or a fallback was cached).
    Generated {
        outfit_id: String,
        outfit_name: String,
        user_id: String,
        is_fallback: bool,
        timestamp: DateTime<Utc>,
    },

    /// The user marked today's outfit as worn.
    ///
    /// Published twice per wear: immediately, and again after a delay with
    /// `force_fresh` set so listeners bypass caches that may lag behind the
    /// backing aggregate store.
    MarkedWorn {
        outfit_id: String,
        outfit_name: String,
        timestamp: DateTime<Utc>,
        force_fresh: bool,
    },

    /// The day's cache entry was cleared (regenerate or ownership mismatch).
    Cleared {
        day: String,
        user_id: String,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based bus for outfit events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub. Listeners
/// subscribe and filter for the variants they care about.
pub struct EventBus {
    sender: broadcast::Sender<Arc<OutfitEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: OutfitEvent) {
        // Ignore send errors (no subscribers = that's fine)
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<OutfitEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
