//! `stylecast weather` — show the current snapshot.

use stylecast_config::AppConfig;
use stylecast_core::weather::WeatherProvider;
use stylecast_engine::derive_parameters;

use super::wiring;

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let provider = wiring::build_weather(&config);

    let snapshot = provider
        .fetch_by_location(&config.default_location)
        .await?;
    wiring::print_weather(&snapshot);

    let params = derive_parameters(&snapshot);
    println!(
        "Suggested direction: {} / {} / {}",
        params.occasion, params.style, params.mood
    );
    Ok(())
}
