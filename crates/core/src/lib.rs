//! # StyleCast Core
//!
//! Domain types, traits, and error definitions for the StyleCast daily
//! outfit orchestrator. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator (weather, wardrobe catalog, generation service, wear
//! tracker, history, trends, storage) is defined as a trait here.
//! Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod event;
pub mod generation;
pub mod history;
pub mod outfit;
pub mod params;
pub mod store;
pub mod user;
pub mod wardrobe;
pub mod wear;
pub mod weather;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use event::{EventBus, OutfitEvent};
pub use generation::{GenerationRequest, GenerationResponse, GenerationService};
pub use history::{OutfitHistory, TopWornItem, TrendService};
pub use outfit::{GeneratedOutfit, OutfitItem, DEFAULT_MIN_CONFIDENCE, FALLBACK_CONFIDENCE};
pub use params::{Mood, Occasion, OutfitParameters, Style};
pub use store::KeyValueStore;
pub use user::UserProfile;
pub use wardrobe::{Category, WardrobeCatalog, WardrobeItem};
pub use wear::{WearRecord, WearTracker};
pub use weather::{WeatherProvider, WeatherSnapshot, WeatherSummary};
