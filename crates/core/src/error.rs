//! Error types for the StyleCast domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator has its own error enum; the top-level `Error`
//! aggregates them for callers that cross context boundaries.

use thiserror::Error;

/// The top-level error type for all StyleCast operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Weather provider errors ---
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    // --- Wardrobe catalog errors ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Generation service errors ---
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    // --- Wear tracking errors ---
    #[error("Wear tracking error: {0}")]
    Wear(#[from] WearError),

    // --- Store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Trend feed errors ---
    #[error("Trend error: {0}")]
    Trend(#[from] TrendError),

    /// A required input was absent. No state is mutated on this path.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Collaborator errors ---

#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    #[error("Weather request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Weather request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Malformed weather payload: {0}")]
    InvalidPayload(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Wardrobe request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Not authorized to read wardrobe for user {0}")]
    Unauthorized(String),

    #[error("Malformed wardrobe payload: {0}")]
    InvalidPayload(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Generation request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Generation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Malformed generation payload: {0}")]
    InvalidPayload(String),

    /// A generation attempt is already running for this (user, day).
    #[error("Generation already in flight for {user_id} on {day}")]
    InFlight { user_id: String, day: String },

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum WearError {
    #[error("Wear tracking request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Outfit {0} was not found by the tracker")]
    OutfitNotFound(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupt entry under key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum TrendError {
    #[error("Trend request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}
