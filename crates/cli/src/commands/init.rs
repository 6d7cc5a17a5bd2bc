//! `stylecast init` — write a starter config file.

use stylecast_config::AppConfig;

pub async fn run() -> anyhow::Result<()> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::write(&config_path, AppConfig::default_toml())?;
    println!("Wrote starter config to {}", config_path.display());
    println!("Set [profile] user_id and api_token to get started.");
    Ok(())
}
