//! The outfit generation orchestrator.
//!
//! Combines the wardrobe fetch, the derived weather parameters, and the
//! generation service into one cached daily outfit. Collaborator failures
//! degrade instead of propagating: a failed wardrobe fetch becomes an empty
//! list, and any generation failure becomes a cached fallback outfit so the
//! day always has a stable state.

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use stylecast_core::error::{Error, GenerationError, Result};
use stylecast_core::event::{EventBus, OutfitEvent};
use stylecast_core::generation::{GenerationRequest, GenerationService};
use stylecast_core::outfit::{GeneratedOutfit, DEFAULT_MIN_CONFIDENCE};
use stylecast_core::user::UserProfile;
use stylecast_core::wardrobe::WardrobeCatalog;
use stylecast_core::weather::WeatherSnapshot;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::DailyOutfitCache;
use crate::latch::{GenerationKey, GenerationLatch, TryBegin};
use crate::mapper::derive_parameters;

const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Orchestrates one generation attempt per (user, day).
pub struct OutfitOrchestrator {
    catalog: Arc<dyn WardrobeCatalog>,
    generator: Arc<dyn GenerationService>,
    cache: DailyOutfitCache,
    latch: GenerationLatch,
    events: Arc<EventBus>,
    generation_timeout: Duration,
    min_confidence: f64,
}

impl OutfitOrchestrator {
    pub fn new(
        catalog: Arc<dyn WardrobeCatalog>,
        generator: Arc<dyn GenerationService>,
        cache: DailyOutfitCache,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            generator,
            cache,
            latch: GenerationLatch::new(),
            events,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Bound one generation attempt; exceeding this routes to the fallback.
    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// Cached outfits below this confidence are regenerated.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Produce the day's outfit for this user.
    ///
    /// Returns the cached outfit when a usable one exists (no service call).
    /// Otherwise runs one attempt under the latch; a concurrent automatic
    /// trigger gets `GenerationError::InFlight` rather than a second call.
    pub async fn generate_daily(
        &self,
        user: &UserProfile,
        weather: &WeatherSnapshot,
        day: NaiveDate,
    ) -> Result<GeneratedOutfit> {
        let key = GenerationKey::new(user.id.clone(), day);

        // A usable cached outfit short-circuits the whole attempt.
        if let Some(existing) = self.cache.read(user, day).await? {
            if existing.is_usable(self.min_confidence) {
                self.latch.complete(&key);
                return Ok(existing);
            }
            // Unusable leftovers (fallbacks, empty outfits) don't hold the
            // latch closed: drop back to Idle and regenerate.
            info!(day = %day, "Cached outfit is not usable, regenerating");
            self.latch.reset(&key);
        }

        match self.latch.try_begin(&key) {
            TryBegin::Started => {}
            TryBegin::InFlight => {
                return Err(Error::Generation(GenerationError::InFlight {
                    user_id: user.id.clone(),
                    day: day.to_string(),
                }));
            }
            TryBegin::AlreadyDone => {
                // Done but nothing usable in the cache (e.g. cleared store
                // out from under us). Start over.
                self.latch.reset(&key);
                self.latch.try_begin(&key);
            }
        }

        let outfit = self.run_attempt(user, weather).await;

        // Cache even the fallback so the day has a stable state. A failed
        // write reopens the latch; the attempt can be retried.
        let cached = match self.cache.write(user, day, outfit).await {
            Ok(cached) => cached,
            Err(e) => {
                self.latch.reset(&key);
                return Err(e);
            }
        };

        self.latch.complete(&key);
        self.events.publish(OutfitEvent::Generated {
            outfit_id: cached.id.clone(),
            outfit_name: cached.name.clone(),
            user_id: user.id.clone(),
            is_fallback: cached.is_fallback,
            timestamp: Utc::now(),
        });

        Ok(cached)
    }

    /// Clear the day's entry and latch, then run a fresh attempt.
    pub async fn regenerate(
        &self,
        user: &UserProfile,
        weather: &WeatherSnapshot,
        day: NaiveDate,
    ) -> Result<GeneratedOutfit> {
        self.clear_day(user, day).await?;
        self.generate_daily(user, weather, day).await
    }

    /// Remove the cached entry and reset the latch for this (user, day).
    pub async fn clear_day(&self, user: &UserProfile, day: NaiveDate) -> Result<()> {
        self.cache.clear(day).await?;
        self.latch.reset(&GenerationKey::new(user.id.clone(), day));
        self.events.publish(OutfitEvent::Cleared {
            day: day.to_string(),
            user_id: user.id.clone(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// One generation attempt: wardrobe fetch (degrading), parameter
    /// derivation, bounded service call, normalize-or-fallback.
    async fn run_attempt(&self, user: &UserProfile, weather: &WeatherSnapshot) -> GeneratedOutfit {
        let wardrobe = match self.catalog.list_items(&user.id).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Wardrobe fetch failed, generating from an empty catalog");
                Vec::new()
            }
        };

        let parameters = derive_parameters(weather);
        let request = GenerationRequest {
            parameters,
            weather: weather.clone(),
            wardrobe,
            profile: user.clone(),
        };

        let attempt =
            tokio::time::timeout(self.generation_timeout, self.generator.generate(request)).await;

        match attempt {
            Ok(Ok(response)) => {
                info!(name = %response.name, confidence = response.confidence, "Outfit generated");
                GeneratedOutfit {
                    id: Uuid::new_v4().to_string(),
                    name: response.name,
                    items: response.items,
                    weather: weather.summary(),
                    reasoning: response.reasoning,
                    confidence: response.confidence.clamp(0.0, 1.0),
                    generated_at: Utc::now(),
                    is_worn: false,
                    worn_at: None,
                    is_fallback: false,
                    parameters: Some(parameters),
                    // Stamped by the cache on write.
                    owner_id: user.id.clone(),
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Generation service failed, synthesizing fallback outfit");
                GeneratedOutfit::fallback(user.id.clone(), weather.summary())
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.generation_timeout.as_secs(),
                    "Generation timed out, synthesizing fallback outfit"
                );
                GeneratedOutfit::fallback(user.id.clone(), weather.summary())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        snapshot, user, CountingCatalog, FailingGenerator, HangingGenerator, ScriptedGenerator,
    };
    use stylecast_store::InMemoryStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn orchestrator(
        catalog: Arc<CountingCatalog>,
        generator: Arc<dyn GenerationService>,
    ) -> OutfitOrchestrator {
        let cache = DailyOutfitCache::new(Arc::new(InMemoryStore::new()));
        OutfitOrchestrator::new(catalog, generator, cache, Arc::new(EventBus::default()))
    }

    #[tokio::test]
    async fn successful_generation_is_cached_and_stamped() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(ScriptedGenerator::ok("Clear-sky casual", 2, 0.92));
        let orch = orchestrator(catalog, generator.clone());

        let outfit = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert_eq!(outfit.name, "Clear-sky casual");
        assert_eq!(outfit.owner_id, "u1");
        assert!(!outfit.is_fallback);
        assert!(outfit.parameters.is_some());
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn retrigger_issues_no_second_service_call() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(ScriptedGenerator::ok("Monday look", 2, 0.9));
        let orch = orchestrator(catalog, generator.clone());

        let first = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();
        let second = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn regenerate_clears_and_retries() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(ScriptedGenerator::ok("Look", 2, 0.9));
        let orch = orchestrator(catalog, generator.clone());

        let first = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();
        let second = orch
            .regenerate(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn service_error_yields_cached_fallback() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(FailingGenerator::server_error());
        let orch = orchestrator(catalog, generator);

        let outfit = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert!(outfit.is_fallback);
        assert_eq!(outfit.confidence, 0.5);
        assert!(outfit.items.is_empty());
        assert!(outfit.reasoning.contains("temporarily unavailable"));
    }

    #[tokio::test]
    async fn fallback_does_not_pin_the_day() {
        // First attempt fails and caches a fallback; a later attempt with a
        // healthy service replaces it.
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let failing = Arc::new(FailingGenerator::server_error());
        let cache = DailyOutfitCache::new(Arc::new(InMemoryStore::new()));
        let events = Arc::new(EventBus::default());

        let orch =
            OutfitOrchestrator::new(catalog.clone(), failing, cache.clone(), events.clone());
        let first = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();
        assert!(first.is_fallback);

        let healthy = Arc::new(ScriptedGenerator::ok("Recovered look", 2, 0.9));
        let orch2 = OutfitOrchestrator::new(catalog, healthy.clone(), cache, events);
        let second = orch2
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert!(!second.is_fallback);
        assert_eq!(healthy.calls(), 1);
    }

    #[tokio::test]
    async fn generation_timeout_yields_fallback() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(HangingGenerator);
        let cache = DailyOutfitCache::new(Arc::new(InMemoryStore::new()));
        let orch =
            OutfitOrchestrator::new(catalog, generator, cache, Arc::new(EventBus::default()))
                .with_generation_timeout(Duration::from_millis(50));

        let outfit = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();
        assert!(outfit.is_fallback);
    }

    #[tokio::test]
    async fn wardrobe_failure_degrades_to_empty_catalog() {
        let catalog = Arc::new(CountingCatalog::failing());
        let generator = Arc::new(ScriptedGenerator::ok("Sparse look", 0, 0.8));
        let orch = orchestrator(catalog, generator.clone());

        let outfit = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        // The attempt went through; the service saw an empty wardrobe.
        assert_eq!(generator.calls(), 1);
        assert_eq!(generator.last_wardrobe_len(), Some(0));
        assert!(!outfit.is_fallback);
    }

    #[tokio::test]
    async fn confidence_is_clamped_on_normalization() {
        let catalog = Arc::new(CountingCatalog::with_items(1));
        let generator = Arc::new(ScriptedGenerator::ok("Overconfident", 1, 1.7));
        let orch = orchestrator(catalog, generator);

        let outfit = orch
            .generate_daily(&user("u1"), &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();
        assert_eq!(outfit.confidence, 1.0);
    }

    #[tokio::test]
    async fn ownership_mismatch_triggers_fresh_generation() {
        let catalog = Arc::new(CountingCatalog::with_items(3));
        let generator = Arc::new(ScriptedGenerator::ok("Fresh for A", 2, 0.9));
        let cache = DailyOutfitCache::new(Arc::new(InMemoryStore::new()));
        let orch = OutfitOrchestrator::new(
            catalog,
            generator.clone(),
            cache.clone(),
            Arc::new(EventBus::default()),
        );

        // User B generates first.
        let b = user("user-b");
        orch.generate_daily(&b, &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        // User A on the same device: B's entry is discarded, A gets fresh.
        let a = user("user-a");
        let outfit = orch
            .generate_daily(&a, &snapshot(72.0, "Clear"), day())
            .await
            .unwrap();

        assert_eq!(outfit.owner_id, "user-a");
        assert_eq!(generator.calls(), 2);
    }
}
