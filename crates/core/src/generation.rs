//! The generation service contract.
//!
//! The backend algorithm is an external capability: we send the derived
//! parameters, the weather, and the wardrobe; we get back a named look with
//! item references, reasoning, and a confidence score. Normalization of the
//! response (clamping, ownership stamping) happens in the orchestrator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::outfit::OutfitItem;
use crate::params::OutfitParameters;
use crate::user::UserProfile;
use crate::wardrobe::WardrobeItem;
use crate::weather::WeatherSnapshot;

/// Everything the generation service needs for one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Derived occasion/style/mood triple.
    #[serde(flatten)]
    pub parameters: OutfitParameters,

    /// The weather the outfit should suit.
    pub weather: WeatherSnapshot,

    /// The user's wardrobe. May be empty when the catalog fetch degraded.
    pub wardrobe: Vec<WardrobeItem>,

    /// The requesting user's profile.
    pub profile: UserProfile,
}

/// The raw (un-normalized) service response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Display name for the look.
    pub name: String,

    /// Garment references drawn from the submitted wardrobe.
    #[serde(default)]
    pub items: Vec<OutfitItem>,

    /// Why the service picked this look.
    #[serde(default)]
    pub reasoning: String,

    /// Confidence score. May arrive outside [0, 1]; clamped downstream.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    0.0
}

/// The outfit generation collaborator.
#[async_trait]
pub trait GenerationService: Send + Sync {
    fn name(&self) -> &str;

    /// Run one generation attempt. Timeouts are enforced by the caller.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GenerationError>;
}
