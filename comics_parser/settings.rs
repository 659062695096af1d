use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::links;

pub const DEFAULT_OUTPUT: &str = "transformers_comics.md";
pub const DEFAULT_TIMEOUT_SECS: i64 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Markdown file written at the end of the run.
    pub output: PathBuf,
    /// Per-request timeout.
    pub timeout_secs: u64,
    #[serde(skip_deserializing, default = "links::default_links")]
    pub links: Vec<String>,
}

impl Settings {
    /// Defaults, then `COMICS_*` environment variables, then command-line values.
    pub fn load(output: Option<PathBuf>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::from_sources(Environment::with_prefix("COMICS"), output, timeout_secs)
    }

    fn from_sources(env: Environment, output: Option<PathBuf>, timeout_secs: Option<u64>) -> Result<Self> {
        let timeout_secs = timeout_secs
            .map(i64::try_from)
            .transpose()
            .context("timeout is too large")?;

        let settings: Settings = Config::builder()
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(env)
            .set_override_option("output", output.map(|p| p.to_string_lossy().into_owned()))?
            .set_override_option("timeout_secs", timeout_secs)?
            .build()?
            .try_deserialize()?;

        if settings.timeout_secs == 0 {
            bail!("timeout must be at least 1 second");
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
