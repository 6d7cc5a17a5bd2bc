//! `stylecast clear` — drop today's outfit and reset the latch.

use stylecast_config::AppConfig;

use super::wiring;

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let service = wiring::signed_in_service(&config).await?;

    service.clear_todays_outfit().await?;
    println!("Cleared today's outfit.");
    Ok(())
}
