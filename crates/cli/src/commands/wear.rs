//! `stylecast wear` — mark today's outfit as worn.

use std::time::Duration;
use stylecast_config::AppConfig;

use super::wiring;

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let service = wiring::signed_in_service(&config).await?;

    let outfit = service.wear_todays_outfit().await?;
    println!("Marked \"{}\" as worn.", outfit.name);

    // Stay alive long enough for the delayed force-fresh broadcast so
    // listeners wired into this process see it before we exit.
    tokio::time::sleep(Duration::from_secs(config.events.rebroadcast_delay_secs)).await;
    Ok(())
}
