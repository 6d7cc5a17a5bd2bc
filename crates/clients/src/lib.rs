//! HTTP implementations of the StyleCast collaborators.
//!
//! Each client wraps a `reqwest::Client` with a per-collaborator timeout and
//! maps transport/status/payload failures into the core error taxonomy.
//! `FallbackWeather` wraps any `WeatherProvider` and degrades to a
//! synthesized snapshot instead of erroring.

pub mod generation;
pub mod history;
pub mod trends;
pub mod wardrobe;
pub mod wear;
pub mod weather;

pub use generation::HttpGenerationClient;
pub use history::HttpHistoryClient;
pub use trends::HttpTrendClient;
pub use wardrobe::HttpWardrobeClient;
pub use wear::HttpWearClient;
pub use weather::{FallbackWeather, HttpWeatherClient};
