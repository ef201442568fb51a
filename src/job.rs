// src/job.rs
//! One collection job: fetch everything, persist, notify.

use anyhow::Result;

use crate::collect;
use crate::collect::config::AppConfig;
use crate::notify::{RunSummary, SlackNotifier};
use crate::sink::SheetsWriter;

/// Run the full job once: collect, write the spreadsheet, post the Slack
/// summary.
///
/// Expected failures (empty result, spreadsheet write errors) are reported
/// to Slack and end the run with Ok; only setup-level problems bubble up.
pub async fn run(config: &AppConfig) -> Result<()> {
    let notifier = SlackNotifier::from_config(&config.slack);

    let providers = collect::build_providers(&config.feeds);
    tracing::info!(sources = providers.len(), "starting news collection");
    let articles = collect::run_once(&providers).await;

    if articles.is_empty() {
        tracing::error!("news collection produced no articles");
        notify_error(&notifier, "news collection produced no articles").await;
        return Ok(());
    }
    tracing::info!(count = articles.len(), "collected articles");

    let sheet_name = chrono::Local::now().format("%Y%m").to_string();

    match SheetsWriter::from_config(&config.sheets) {
        Some(writer) => {
            if let Err(e) = writer.write(&articles).await {
                tracing::error!(error = ?e, "spreadsheet write failed");
                notify_error(&notifier, &format!("spreadsheet write failed: {e:#}")).await;
                return Ok(());
            }
            tracing::info!("spreadsheet updated");
        }
        None => tracing::warn!("spreadsheet sink not configured; skipping write"),
    }

    if let Some(n) = &notifier {
        let summary = RunSummary::new(&articles, sheet_name);
        if let Err(e) = n.send_summary(&summary, &articles).await {
            tracing::warn!(error = ?e, "slack summary failed");
        }
    }

    Ok(())
}

async fn notify_error(notifier: &Option<SlackNotifier>, message: &str) {
    if let Some(n) = notifier {
        if let Err(e) = n.send_error(message).await {
            tracing::warn!(error = ?e, "slack error notification failed");
        }
    }
}
