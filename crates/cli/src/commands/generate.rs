//! `stylecast generate` — produce (or show) today's outfit.

use stylecast_config::AppConfig;

use super::wiring;

pub async fn run(regenerate: bool) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let service = wiring::signed_in_service(&config).await?;

    let weather = service.refresh_weather().await?;
    wiring::print_weather(&weather);
    println!();

    let outfit = if regenerate {
        service.regenerate_todays_outfit().await?
    } else {
        service.generate_todays_outfit().await?
    };

    wiring::print_outfit(&outfit);
    Ok(())
}
