// src/collect/providers/mod.rs
pub mod feed;
pub mod scrape;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Browser-like identity; several sources refuse the default reqwest agent.
pub(crate) const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One GET with the browser identity header and the fixed per-request
/// timeout. Single attempt; callers decide whether a failure skips the URL
/// or fails the source.
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, BROWSER_UA)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("non-2xx from {url}"))?;
    resp.text()
        .await
        .with_context(|| format!("reading body from {url}"))
}

/// Capture instant in a fixed, sortable UTC representation.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
