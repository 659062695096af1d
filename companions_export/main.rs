mod export;
mod record;
mod render;
mod settings;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "companions_export",
    version,
    about = "Turn the G1 names table into a companions list for the game source"
)]
struct Cli {
    /// CSV with US Name, RU Name, Team, Season and Type columns
    csv_path: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load(cli.csv_path)?;
    info!(settings_loaded = ?settings, msg = "Starting companions export");

    let stats = export::run(&settings)?;
    println!(
        "Wrote {} companions ({} Autobots, {} Decepticons) from {} rows -> {}",
        stats.autobots + stats.decepticons,
        stats.autobots,
        stats.decepticons,
        stats.loaded,
        stats.output.display()
    );
    Ok(())
}
