//! Configuration loading, validation, and management for StyleCast.
//!
//! Loads configuration from `~/.stylecast/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.stylecast/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bearer token sent to the wardrobe, generation, and wear services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Default location for weather lookups.
    #[serde(default = "default_location")]
    pub default_location: String,

    /// Weather provider configuration.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Wardrobe catalog configuration.
    #[serde(default)]
    pub wardrobe: WardrobeConfig,

    /// Generation service configuration.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Wear tracking configuration.
    #[serde(default)]
    pub wear: WearConfig,

    /// Persisted cache store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Event channel configuration.
    #[serde(default)]
    pub events: EventsConfig,

    /// Dashboard scoring configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// The local user profile (this is a client-side, single-user app).
    #[serde(default)]
    pub profile: ProfileConfig,
}

fn default_location() -> String {
    "New York".into()
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_token", &redact(&self.api_token))
            .field("default_location", &self.default_location)
            .field("weather", &self.weather)
            .field("wardrobe", &self.wardrobe)
            .field("generation", &self.generation)
            .field("wear", &self.wear)
            .field("store", &self.store)
            .field("events", &self.events)
            .field("dashboard", &self.dashboard)
            .field("profile", &self.profile)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub api_url: String,

    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Readings older than this are flagged stale.
    #[serde(default = "default_stale_after")]
    pub stale_after_mins: u64,
}

fn default_weather_url() -> String {
    "https://weather.stylecast.app/v1".into()
}
fn default_weather_timeout() -> u64 {
    8
}
fn default_stale_after() -> u64 {
    60
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_weather_url(),
            timeout_secs: default_weather_timeout(),
            stale_after_mins: default_stale_after(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.stylecast.app/v1".into()
}
fn default_fetch_timeout() -> u64 {
    10
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bounded timeout for one generation attempt. Exceeding it routes to
    /// the fallback path.
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,

    /// Cached outfits below this confidence are regenerated.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

fn default_generation_timeout() -> u64 {
    20
}
fn default_min_confidence() -> f64 {
    stylecast_core::DEFAULT_MIN_CONFIDENCE
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_generation_timeout(),
            min_confidence: default_min_confidence(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WearConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for WearConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// "file" or "memory".
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Path for the file backend. Defaults to `~/.stylecast/cache.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_store_backend() -> String {
    "file".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Delay before the second, force-fresh wear broadcast. Compensates for
    /// read-after-write lag in the backing aggregate store.
    #[serde(default = "default_rebroadcast_delay")]
    pub rebroadcast_delay_secs: u64,

    /// Broadcast channel capacity.
    #[serde(default = "default_event_capacity")]
    pub capacity: usize,
}

fn default_rebroadcast_delay() -> u64 {
    5
}
fn default_event_capacity() -> usize {
    64
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            rebroadcast_delay_secs: default_rebroadcast_delay(),
            capacity: default_event_capacity(),
        }
    }
}

/// Dashboard heuristic constants. Defaults are the product's established
/// values; change them deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_goal_weight")]
    pub style_goal_weight: f64,

    #[serde(default = "default_size_weight")]
    pub wardrobe_size_weight: f64,

    #[serde(default = "default_color_weight")]
    pub color_variety_weight: f64,

    #[serde(default = "default_seasonal_weight")]
    pub seasonal_balance_weight: f64,

    /// Categories with fewer mapped items than this are flagged as gaps.
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: u32,

    /// How many top-worn items to surface.
    #[serde(default = "default_top_items")]
    pub top_items: usize,
}

fn default_goal_weight() -> f64 {
    0.2
}
fn default_size_weight() -> f64 {
    0.3
}
fn default_color_weight() -> f64 {
    0.25
}
fn default_seasonal_weight() -> f64 {
    0.25
}
fn default_gap_threshold() -> u32 {
    3
}
fn default_top_items() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            style_goal_weight: default_goal_weight(),
            wardrobe_size_weight: default_size_weight(),
            color_variety_weight: default_color_weight(),
            seasonal_balance_weight: default_seasonal_weight(),
            gap_threshold: default_gap_threshold(),
            top_items: default_top_items(),
        }
    }
}

/// The configured local user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Stable user id, as known to the backend services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default = "default_display_name")]
    pub display_name: String,

    #[serde(default)]
    pub style_goals: Vec<String>,

    #[serde(default = "default_wardrobe_size_target")]
    pub wardrobe_size_target: u32,
}

fn default_display_name() -> String {
    "You".into()
}
fn default_wardrobe_size_target() -> u32 {
    50
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            display_name: default_display_name(),
            style_goals: Vec::new(),
            wardrobe_size_target: default_wardrobe_size_target(),
        }
    }
}

impl ProfileConfig {
    /// Build the domain profile, if a user id is configured.
    pub fn to_user_profile(&self) -> Option<stylecast_core::UserProfile> {
        let user_id = self.user_id.clone()?;
        let mut profile =
            stylecast_core::UserProfile::new(user_id, self.display_name.clone())
                .with_style_goals(self.style_goals.clone());
        profile.wardrobe_size_target = self.wardrobe_size_target;
        Some(profile)
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.stylecast/config.toml).
    ///
    /// Environment variable overrides:
    /// - `STYLECAST_API_TOKEN`
    /// - `STYLECAST_LOCATION`
    /// - `STYLECAST_API_URL` (wardrobe, generation, and wear base URL)
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.api_token.is_none() {
            config.api_token = std::env::var("STYLECAST_API_TOKEN").ok();
        }

        if let Ok(location) = std::env::var("STYLECAST_LOCATION") {
            config.default_location = location;
        }

        if let Ok(url) = std::env::var("STYLECAST_API_URL") {
            config.wardrobe.api_url = url.clone();
            config.generation.api_url = url.clone();
            config.wear.api_url = url;
        }

        if let Ok(user_id) = std::env::var("STYLECAST_USER") {
            config.profile.user_id = Some(user_id);
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".stylecast")
    }

    /// Resolved path for the file store backend.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("cache.json"))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weight_sum = self.dashboard.style_goal_weight
            + self.dashboard.wardrobe_size_weight
            + self.dashboard.color_variety_weight
            + self.dashboard.seasonal_balance_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::ValidationError(format!(
                "dashboard progress weights must sum to 1.0 (got {weight_sum})"
            )));
        }

        if !(0.0..=1.0).contains(&self.generation.min_confidence) {
            return Err(ConfigError::ValidationError(
                "generation.min_confidence must be between 0.0 and 1.0".into(),
            ));
        }

        if self.generation.timeout_secs == 0 || self.weather.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be non-zero".into(),
            ));
        }

        if !matches!(self.store.backend.as_str(), "file" | "memory") {
            return Err(ConfigError::ValidationError(format!(
                "unknown store backend '{}' (expected \"file\" or \"memory\")",
                self.store.backend
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for first-run setup).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            default_location: default_location(),
            weather: WeatherConfig::default(),
            wardrobe: WardrobeConfig::default(),
            generation: GenerationConfig::default(),
            wear: WearConfig::default(),
            store: StoreConfig::default(),
            events: EventsConfig::default(),
            dashboard: DashboardConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
