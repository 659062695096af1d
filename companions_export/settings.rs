use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_CSV_PATH: &str = "G1_translations.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub csv_path: PathBuf,
}

impl Settings {
    /// Default path, then `COMPANIONS_CSV_PATH`, then the command-line argument.
    pub fn load(csv_path: Option<PathBuf>) -> Result<Self> {
        Self::from_sources(Environment::with_prefix("COMPANIONS"), csv_path)
    }

    fn from_sources(env: Environment, csv_path: Option<PathBuf>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("csv_path", DEFAULT_CSV_PATH)?
            .add_source(env)
            .set_override_option("csv_path", csv_path.map(|p| p.to_string_lossy().into_owned()))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Sits next to the input: `G1_translations.csv` -> `G1_translations.output.ts`.
    pub fn output_path(&self) -> PathBuf {
        self.csv_path.with_extension("output.ts")
    }
}
