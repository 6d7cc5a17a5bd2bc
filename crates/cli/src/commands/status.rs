//! `stylecast status` — show configuration and cache state.

use stylecast_config::AppConfig;

use super::wiring;

pub async fn run() -> anyhow::Result<()> {
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = AppConfig::load()?;

    println!("Config file:   {}", config_path.display());
    println!(
        "               {}",
        if config_path.exists() {
            "present"
        } else {
            "missing (defaults in effect — run `stylecast init`)"
        }
    );
    println!("Location:      {}", config.default_location);
    println!(
        "Store:         {} ({})",
        config.store.backend,
        config.store_path().display()
    );
    println!("API token:     {}", if config.api_token.is_some() { "set" } else { "not set" });

    match config.profile.to_user_profile() {
        None => println!("User:          not configured"),
        Some(profile) => {
            println!("User:          {} ({})", profile.display_name, profile.id);
            let service = wiring::signed_in_service(&config).await?;
            match service.todays_outfit().await? {
                None => println!("Today:         no outfit cached"),
                Some(outfit) => println!(
                    "Today:         \"{}\"{}{}",
                    outfit.name,
                    if outfit.is_fallback { " (fallback)" } else { "" },
                    if outfit.is_worn { " — worn" } else { "" }
                ),
            }
        }
    }

    Ok(())
}
