//! `stylecast dashboard` — show the style dashboard.

use anyhow::Context;
use stylecast_config::AppConfig;
use stylecast_dashboard::GapPriority;
use stylecast_engine::DailyOutfitService;

use super::wiring;

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let profile = config.profile.to_user_profile().context(
        "no user configured — set [profile] user_id in config.toml or STYLECAST_USER",
    )?;
    let aggregator = wiring::build_aggregator(&config);

    let model = aggregator
        .assemble(&profile, DailyOutfitService::today())
        .await;

    println!("Style dashboard for {}", profile.display_name);
    println!(
        "  {} items ({} favorites), {} outfits this week",
        model.total_items, model.favorites, model.outfits_this_week
    );
    println!("  Overall progress: {}%", model.overall_progress);
    println!("  Seasonal balance: {}", model.seasonal_balance.status);

    if !model.collections.is_empty() {
        println!("\nCollections:");
        for collection in &model.collections {
            println!("  {:<12} {}", collection.category, collection.count);
        }
    }

    if !model.gaps.is_empty() {
        println!("\nWardrobe gaps:");
        for gap in &model.gaps {
            let marker = match gap.priority {
                GapPriority::High => "!",
                GapPriority::Medium => "-",
            };
            println!("  {marker} {}", gap.suggestion);
        }
    }

    if !model.top_items.is_empty() {
        println!("\nMost worn:");
        for item in &model.top_items {
            println!("  {} ({}x)", item.name, item.wear_count);
        }
    }

    if !model.trending_styles.is_empty() {
        println!("\nTrending: {}", model.trending_styles.join(", "));
    }

    if let Some(outfit) = &model.todays_outfit {
        println!("\nToday's suggestion:");
        wiring::print_outfit(outfit);
    }

    Ok(())
}
