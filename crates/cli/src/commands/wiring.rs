//! Shared construction: config → collaborators → service/aggregator.

use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use stylecast_clients::{
    FallbackWeather, HttpGenerationClient, HttpHistoryClient, HttpTrendClient,
    HttpWardrobeClient, HttpWearClient, HttpWeatherClient,
};
use stylecast_config::AppConfig;
use stylecast_core::outfit::GeneratedOutfit;
use stylecast_core::store::KeyValueStore;
use stylecast_core::weather::{WeatherProvider, WeatherSnapshot};
use stylecast_dashboard::DashboardAggregator;
use stylecast_engine::{DailyOutfitCache, DailyOutfitService};
use stylecast_store::{FileStore, InMemoryStore};

pub(crate) fn build_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match config.store.backend.as_str() {
        "memory" => Arc::new(InMemoryStore::new()),
        _ => Arc::new(FileStore::new(config.store_path())),
    }
}

pub(crate) fn build_weather(config: &AppConfig) -> Arc<dyn WeatherProvider> {
    let http = HttpWeatherClient::with_timeout(
        &config.weather.api_url,
        Duration::from_secs(config.weather.timeout_secs),
    );
    Arc::new(
        FallbackWeather::new(Arc::new(http))
            .with_timeout(Duration::from_secs(config.weather.timeout_secs))
            .with_stale_after(chrono::Duration::minutes(
                config.weather.stale_after_mins as i64,
            )),
    )
}

pub(crate) fn build_service(config: &AppConfig) -> DailyOutfitService {
    let mut wardrobe = HttpWardrobeClient::new(&config.wardrobe.api_url);
    let mut generation = HttpGenerationClient::new(&config.generation.api_url);
    let mut wear = HttpWearClient::new(&config.wear.api_url);
    if let Some(token) = &config.api_token {
        wardrobe = wardrobe.with_token(token);
        generation = generation.with_token(token);
        wear = wear.with_token(token);
    }

    DailyOutfitService::new(
        build_weather(config),
        Arc::new(wardrobe),
        Arc::new(generation),
        Arc::new(wear),
        build_store(config),
    )
    .with_default_location(&config.default_location)
    .with_generation_timeout(Duration::from_secs(config.generation.timeout_secs))
    .with_min_confidence(config.generation.min_confidence)
    .with_rebroadcast_delay(Duration::from_secs(config.events.rebroadcast_delay_secs))
}

/// Build the service and sign in the configured profile.
pub(crate) async fn signed_in_service(config: &AppConfig) -> anyhow::Result<DailyOutfitService> {
    let profile = config.profile.to_user_profile().context(
        "no user configured — set [profile] user_id in config.toml or STYLECAST_USER",
    )?;
    let service = build_service(config);
    service.set_active_user(profile).await;
    Ok(service)
}

pub(crate) fn build_aggregator(config: &AppConfig) -> DashboardAggregator {
    let mut wardrobe = HttpWardrobeClient::new(&config.wardrobe.api_url);
    let mut history = HttpHistoryClient::new(&config.wear.api_url);
    if let Some(token) = &config.api_token {
        wardrobe = wardrobe.with_token(token);
        history = history.with_token(token);
    }

    DashboardAggregator::new(
        Arc::new(wardrobe),
        Arc::new(history),
        Arc::new(HttpTrendClient::new(&config.wardrobe.api_url)),
        DailyOutfitCache::new(build_store(config)),
        config.dashboard.clone(),
    )
}

pub(crate) fn print_weather(snapshot: &WeatherSnapshot) {
    let mut flags = Vec::new();
    if snapshot.is_fallback {
        flags.push("fallback");
    }
    if snapshot.is_stale {
        flags.push("stale");
    }
    let suffix = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    println!(
        "{}: {:.0}°F, {} (humidity {}%, wind {:.0} mph){}",
        snapshot.location,
        snapshot.temperature_f,
        snapshot.condition,
        snapshot.humidity,
        snapshot.wind_speed_mph,
        suffix
    );
}

pub(crate) fn print_outfit(outfit: &GeneratedOutfit) {
    println!("{}", outfit.name);
    if outfit.items.is_empty() {
        println!("  (no items)");
    }
    for item in &outfit.items {
        println!("  - {} ({}, {})", item.name, item.category, item.color);
    }
    println!("  {}", outfit.reasoning);
    println!(
        "  confidence {:.0}%{}{}",
        outfit.confidence * 100.0,
        if outfit.is_fallback { ", fallback" } else { "" },
        if outfit.is_worn { ", worn" } else { "" }
    );
}
