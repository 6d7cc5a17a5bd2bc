//! The daily outfit service — the facade the host application talks to.
//!
//! Holds the session (active user, latest weather snapshot) and exposes the
//! imperative actions: generate, wear, clear, regenerate. Preconditions are
//! enforced here: with no active user or no weather snapshot, actions fail
//! before any state is touched.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use stylecast_core::error::{Error, Result};
use stylecast_core::event::{EventBus, OutfitEvent};
use stylecast_core::generation::GenerationService;
use stylecast_core::outfit::GeneratedOutfit;
use stylecast_core::store::KeyValueStore;
use stylecast_core::user::UserProfile;
use stylecast_core::wardrobe::WardrobeCatalog;
use stylecast_core::wear::WearTracker;
use stylecast_core::weather::{WeatherProvider, WeatherSnapshot};
use tokio::sync::broadcast;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::DailyOutfitCache;
use crate::orchestrator::OutfitOrchestrator;
use crate::wear::WearSynchronizer;

#[derive(Default)]
struct Session {
    user: Option<UserProfile>,
    weather: Option<WeatherSnapshot>,
}

/// Top-level entry point wiring the orchestrator, cache, and synchronizer.
pub struct DailyOutfitService {
    weather_provider: Arc<dyn WeatherProvider>,
    orchestrator: OutfitOrchestrator,
    synchronizer: WearSynchronizer,
    cache: DailyOutfitCache,
    events: Arc<EventBus>,
    default_location: String,
    session: RwLock<Session>,
}

impl DailyOutfitService {
    pub fn new(
        weather_provider: Arc<dyn WeatherProvider>,
        catalog: Arc<dyn WardrobeCatalog>,
        generator: Arc<dyn GenerationService>,
        tracker: Arc<dyn WearTracker>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let events = Arc::new(EventBus::default());
        let cache = DailyOutfitCache::new(store);
        let orchestrator =
            OutfitOrchestrator::new(catalog, generator, cache.clone(), Arc::clone(&events));
        let synchronizer =
            WearSynchronizer::new(tracker, cache.clone(), Arc::clone(&events));

        Self {
            weather_provider,
            orchestrator,
            synchronizer,
            cache,
            events,
            default_location: "New York".into(),
            session: RwLock::new(Session::default()),
        }
    }

    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.orchestrator = self.orchestrator.with_generation_timeout(timeout);
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.orchestrator = self.orchestrator.with_min_confidence(min_confidence);
        self
    }

    pub fn with_rebroadcast_delay(mut self, delay: Duration) -> Self {
        self.synchronizer = self.synchronizer.with_rebroadcast_delay(delay);
        self
    }

    /// Today's calendar day, UTC.
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    // --- Session ---

    pub async fn set_active_user(&self, user: UserProfile) {
        info!(user_id = %user.id, "Active user set");
        self.session.write().await.user = Some(user);
    }

    pub async fn clear_active_user(&self) {
        self.session.write().await.user = None;
    }

    pub async fn active_user(&self) -> Option<UserProfile> {
        self.session.read().await.user.clone()
    }

    /// Fetch a fresh snapshot for the default location and keep it on the
    /// session for subsequent generation calls.
    pub async fn refresh_weather(&self) -> Result<WeatherSnapshot> {
        let snapshot = self
            .weather_provider
            .fetch_by_location(&self.default_location)
            .await?;
        self.session.write().await.weather = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub async fn current_weather(&self) -> Option<WeatherSnapshot> {
        self.session.read().await.weather.clone()
    }

    // --- Imperative actions ---

    /// Generate (or return the cached) outfit for today.
    pub async fn generate_todays_outfit(&self) -> Result<GeneratedOutfit> {
        let (user, weather) = self.required_session().await?;
        self.orchestrator
            .generate_daily(&user, &weather, Self::today())
            .await
    }

    /// Clear today's entry and latch, then run a fresh attempt.
    pub async fn regenerate_todays_outfit(&self) -> Result<GeneratedOutfit> {
        let (user, weather) = self.required_session().await?;
        self.orchestrator
            .regenerate(&user, &weather, Self::today())
            .await
    }

    /// Mark today's outfit worn.
    pub async fn wear_todays_outfit(&self) -> Result<GeneratedOutfit> {
        let user = self.required_user().await?;
        self.synchronizer.wear(&user, Self::today()).await
    }

    /// Drop today's cached outfit and reset the generation latch.
    pub async fn clear_todays_outfit(&self) -> Result<()> {
        let user = self.required_user().await?;
        self.orchestrator.clear_day(&user, Self::today()).await
    }

    /// Read today's cached outfit without triggering generation.
    pub async fn todays_outfit(&self) -> Result<Option<GeneratedOutfit>> {
        let user = self.required_user().await?;
        self.cache.read(&user, Self::today()).await
    }

    /// Subscribe to outfit lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<OutfitEvent>> {
        self.events.subscribe()
    }

    /// The shared event bus, for wiring listeners at startup.
    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    // --- Preconditions ---

    async fn required_user(&self) -> Result<UserProfile> {
        self.session
            .read()
            .await
            .user
            .clone()
            .ok_or_else(|| Error::Precondition("no active user".into()))
    }

    async fn required_session(&self) -> Result<(UserProfile, WeatherSnapshot)> {
        let session = self.session.read().await;
        let user = session
            .user
            .clone()
            .ok_or_else(|| Error::Precondition("no active user".into()))?;
        let weather = session
            .weather
            .clone()
            .ok_or_else(|| Error::Precondition("no weather snapshot available".into()))?;
        Ok((user, weather))
    }
}
