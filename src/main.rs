//! News collection job: binary entrypoint.
//!
//! Collects articles from every configured source, writes them to the
//! spreadsheet and posts the Slack run summary. One run per invocation;
//! periodic execution belongs to an external scheduler (cron, systemd
//! timer).

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use news_harvester::collect::config;
use news_harvester::job;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_harvester=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_default()?;
    job::run(&cfg).await
}
