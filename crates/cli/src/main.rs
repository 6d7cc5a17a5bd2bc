//! StyleCast CLI — the main entry point.
//!
//! Commands:
//! - `init`      — Write a starter config file
//! - `generate`  — Generate (or show) today's outfit
//! - `wear`      — Mark today's outfit as worn
//! - `clear`     — Clear today's outfit and regeneration latch
//! - `weather`   — Show the current weather snapshot
//! - `dashboard` — Show the style dashboard
//! - `status`    — Show configuration and cache status

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "stylecast",
    about = "StyleCast — daily outfit recommendations from weather and wardrobe",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config file to ~/.stylecast/config.toml
    Init,

    /// Generate today's outfit (returns the cached one if present)
    Generate {
        /// Discard today's outfit and generate a fresh one
        #[arg(short, long)]
        regenerate: bool,
    },

    /// Mark today's outfit as worn
    Wear,

    /// Clear today's outfit and reset the generation latch
    Clear,

    /// Show the current weather snapshot
    Weather,

    /// Show the style dashboard
    Dashboard,

    /// Show configuration and cache status
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Generate { regenerate } => commands::generate::run(regenerate).await?,
        Commands::Wear => commands::wear::run().await?,
        Commands::Clear => commands::clear::run().await?,
        Commands::Weather => commands::weather::run().await?,
        Commands::Dashboard => commands::dashboard::run().await?,
        Commands::Status => commands::status::run().await?,
    }

    Ok(())
}
