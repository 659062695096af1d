mod fetch;
mod fragment;
mod links;
mod sections;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use fetch::RunError;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "comics_parser",
    version,
    about = "Fetch comic wiki pages and save their Synopsis and Featured characters as Markdown"
)]
struct Cli {
    /// Markdown file to write (overwritten on every run)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Per-request timeout in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=i64::MAX as u64))]
    timeout: Option<u64>,
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

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let settings = Settings::load(cli.output, cli.timeout)?;
    info!(settings_loaded = ?settings, msg = "Starting comics parser");

    match fetch::run(&settings) {
        Ok(stats) => {
            println!(
                "Done: {} pages ({} ok, {} errors) -> {}",
                stats.total,
                stats.ok,
                stats.errors,
                settings.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(RunError::NoLinks) => {
            eprintln!("{}", RunError::NoLinks);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
