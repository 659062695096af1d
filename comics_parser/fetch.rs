use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fragment::{build_markdown_fragment, failure_fragment, join_fragments};
use crate::settings::Settings;

const USER_AGENT: &str = concat!("tf_comics_tools/", env!("CARGO_PKG_VERSION"));

/// Why a single page could not be fetched. Recorded in the output, never fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("No links in LINKS_TEXT.")]
    NoLinks,
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Run stats returned after completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

/// GET one page and return its body. Non-2xx statuses are errors.
pub fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }
    Ok(response.text()?)
}

/// Fetch every link in order and render one fragment per link.
/// A failed fetch becomes a failure fragment; processing always continues.
pub fn collect_fragments<F>(links: &[String], mut fetch: F) -> (Vec<String>, RunStats)
where
    F: FnMut(&str) -> Result<String, FetchError>,
{
    let total = links.len();
    let mut fragments = Vec::with_capacity(total);
    let mut ok = 0usize;
    let mut errors = 0usize;

    for (idx, url) in links.iter().enumerate() {
        info!("[{}/{}] Processing: {}", idx + 1, total, url);

        match fetch(url) {
            Ok(html) => {
                debug!(bytes = html.len(), "fetched {}", url);
                fragments.push(build_markdown_fragment(url, &html));
                ok += 1;
                info!("  parsed successfully");
            }
            Err(e) => {
                warn!("  FAILED: {}", e);
                fragments.push(failure_fragment(url, &e));
                errors += 1;
            }
        }
    }

    (fragments, RunStats { total, ok, errors })
}

/// Fetch all configured pages and write the joined Markdown document,
/// overwriting any previous output.
pub fn run(settings: &Settings) -> Result<RunStats, RunError> {
    if settings.links.is_empty() {
        return Err(RunError::NoLinks);
    }

    let client = Client::builder()
        .timeout(settings.timeout())
        .user_agent(USER_AGENT)
        .build()
        .map_err(RunError::Client)?;

    let (fragments, stats) = collect_fragments(&settings.links, |url| fetch_page(&client, url));

    fs::write(&settings.output, join_fragments(&fragments)).map_err(|source| RunError::Write {
        path: settings.output.clone(),
        source,
    })?;

    let saved = fs::canonicalize(&settings.output).unwrap_or_else(|_| settings.output.clone());
    info!(
        "Saved {} fragments ({} ok, {} errors) to {}",
        stats.total,
        stats.ok,
        stats.errors,
        saved.display()
    );

    Ok(stats)
}

// ── Tests ──
