//! Shared mock collaborators for engine tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use std::time::Duration;
use stylecast_core::error::{CatalogError, GenerationError, WearError, WeatherError};
use stylecast_core::generation::{GenerationRequest, GenerationResponse, GenerationService};
use stylecast_core::outfit::OutfitItem;
use stylecast_core::user::UserProfile;
use stylecast_core::wardrobe::{Category, WardrobeCatalog, WardrobeItem};
use stylecast_core::wear::{WearRecord, WearTracker};
use stylecast_core::weather::{WeatherProvider, WeatherSnapshot};

pub fn user(id: &str) -> UserProfile {
    UserProfile::new(id, "Test User")
}

pub fn snapshot(temperature_f: f64, condition: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_f,
        condition: condition.into(),
        humidity: 50,
        wind_speed_mph: 5.0,
        location: "Testville".into(),
        is_fallback: false,
        is_stale: false,
        fetched_at: Utc::now(),
    }
}

fn wardrobe_item(n: usize) -> WardrobeItem {
    WardrobeItem {
        id: format!("w{n}"),
        name: format!("Item {n}"),
        category: Category::Tops,
        color: "navy".into(),
        wear_count: 0,
        is_favorite: false,
        diversity_score: 0.5,
    }
}

/// A weather provider that returns a fixed snapshot.
pub struct StubWeather {
    snapshot: WeatherSnapshot,
}

impl StubWeather {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_by_location(
        &self,
        location: &str,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let mut snapshot = self.snapshot.clone();
        snapshot.location = location.to_string();
        Ok(snapshot)
    }
}

/// A catalog that returns a fixed number of items (or always fails) and
/// counts calls.
pub struct CountingCatalog {
    items: usize,
    fail: bool,
    calls: Mutex<usize>,
}

impl CountingCatalog {
    pub fn with_items(items: usize) -> Self {
        Self {
            items,
            fail: false,
            calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            items: 0,
            fail: true,
            calls: Mutex::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl WardrobeCatalog for CountingCatalog {
    fn name(&self) -> &str {
        "counting"
    }

    async fn list_items(&self, _user_id: &str) -> Result<Vec<WardrobeItem>, CatalogError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(CatalogError::Network("conn refused".into()));
        }
        Ok((0..self.items).map(wardrobe_item).collect())
    }
}

/// A generator that returns a scripted response and records what it saw.
pub struct ScriptedGenerator {
    name: String,
    items: usize,
    confidence: f64,
    calls: Mutex<usize>,
    last_wardrobe_len: Mutex<Option<usize>>,
}

impl ScriptedGenerator {
    pub fn ok(name: &str, items: usize, confidence: f64) -> Self {
        Self {
            name: name.into(),
            items,
            confidence,
            calls: Mutex::new(0),
            last_wardrobe_len: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn last_wardrobe_len(&self) -> Option<usize> {
        *self.last_wardrobe_len.lock().unwrap()
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        *self.calls.lock().unwrap() += 1;
        *self.last_wardrobe_len.lock().unwrap() = Some(request.wardrobe.len());
        Ok(GenerationResponse {
            name: self.name.clone(),
            items: (0..self.items)
                .map(|n| OutfitItem {
                    id: format!("w{n}"),
                    name: format!("Item {n}"),
                    category: Category::Tops,
                    color: "navy".into(),
                })
                .collect(),
            reasoning: "scripted".into(),
            confidence: self.confidence,
        })
    }
}

/// A generator that always fails.
pub struct FailingGenerator {
    error: GenerationError,
    calls: Mutex<usize>,
}

impl FailingGenerator {
    pub fn server_error() -> Self {
        Self {
            error: GenerationError::ApiError {
                status_code: 500,
                message: "Internal Server Error".into(),
            },
            calls: Mutex::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl GenerationService for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        *self.calls.lock().unwrap() += 1;
        Err(self.error.clone())
    }
}

/// A generator that hangs forever (for timeout testing).
pub struct HangingGenerator;

#[async_trait]
impl GenerationService for HangingGenerator {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        unreachable!()
    }
}

/// A tracker that records calls, optionally failing them.
pub struct RecordingTracker {
    fail: bool,
    attempts: Mutex<usize>,
    records: Mutex<Vec<WearRecord>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self {
            fail: false,
            attempts: Mutex::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            attempts: Mutex::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Total calls, including failed ones.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    /// Successfully recorded wears.
    pub fn records(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn last_record(&self) -> Option<WearRecord> {
        self.records.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl WearTracker for RecordingTracker {
    fn name(&self) -> &str {
        "recording"
    }

    async fn mark_worn(&self, record: &WearRecord) -> Result<(), WearError> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(WearError::Network("conn refused".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
