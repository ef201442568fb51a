use anyhow::{anyhow, Context, Result};
use reqwest::Client;

use super::RunSummary;
use crate::collect::config::SlackConfig;
use crate::collect::types::Article;

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

pub struct SlackNotifier {
    token: String,
    channel: String,
    client: Client,
}

impl SlackNotifier {
    pub fn new(token: String, channel: String) -> Self {
        Self {
            token,
            channel,
            client: Client::new(),
        }
    }

    /// Build from config (env overrides already applied by the loader).
    /// None when the channel is disabled or credentials are missing, so the
    /// job runs without notifications.
    pub fn from_config(cfg: &SlackConfig) -> Option<Self> {
        if !cfg.enabled {
            tracing::debug!("Slack disabled in config");
            return None;
        }
        match (&cfg.token, &cfg.channel) {
            (Some(token), Some(channel)) => Some(Self::new(token.clone(), channel.clone())),
            _ => {
                tracing::warn!("Slack enabled but token/channel missing; notifications off");
                None
            }
        }
    }

    async fn post(&self, text: &str) -> Result<()> {
        let body = serde_json::json!({ "channel": self.channel, "text": text });

        let resp = self
            .client
            .post(POST_MESSAGE_URL)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("slack post")?
            .error_for_status()
            .context("slack non-2xx")?;

        // chat.postMessage reports API-level failures inside a 200 body.
        let api: serde_json::Value = resp.json().await.context("slack response body")?;
        if !api.get("ok").and_then(|v| v.as_bool()).unwrap_or(false) {
            let reason = api
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown");
            return Err(anyhow!("slack api error: {reason}"));
        }
        Ok(())
    }

    pub async fn send_summary(&self, summary: &RunSummary, articles: &[Article]) -> Result<()> {
        self.post(&render_summary(summary, articles)).await
    }

    pub async fn send_error(&self, error_message: &str) -> Result<()> {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let text = format!(
            ":warning: *News collection failed*\n\nOccurred at: {now}\nError: {error_message}"
        );
        self.post(&text).await
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Render the run-summary message. The category block and the top-articles
/// block appear only when the corresponding enrichment fields are present
/// on at least one record.
pub fn render_summary(summary: &RunSummary, articles: &[Article]) -> String {
    use std::fmt::Write as _;

    let mut msg = String::new();
    let _ = writeln!(msg, ":newspaper: *News collection finished*");
    let _ = writeln!(msg);
    let _ = writeln!(msg, "Ran at: {}", summary.ran_at);
    let _ = writeln!(msg, "Articles: {}", summary.total);
    let _ = writeln!(msg, "Sources: {}", summary.per_source.len());
    let _ = writeln!(msg, "Target sheet: {}", summary.sheet_name);
    let _ = writeln!(msg);
    let _ = writeln!(msg, "*Per source:*");
    for (source, count) in &summary.per_source {
        let _ = writeln!(msg, "• {source}: {count}");
    }

    let mut categories: std::collections::BTreeMap<&str, usize> = Default::default();
    for a in articles {
        if let Some(cat) = &a.category {
            *categories.entry(cat.as_str()).or_default() += 1;
        }
    }
    if !categories.is_empty() {
        let _ = writeln!(msg);
        let _ = writeln!(msg, "*Per category:*");
        for (cat, count) in &categories {
            let _ = writeln!(msg, "• {cat}: {count}");
        }
    }

    let mut ranked: Vec<&Article> = articles.iter().filter(|a| a.importance.is_some()).collect();
    if !ranked.is_empty() {
        ranked.sort_by(|a, b| {
            b.importance
                .partial_cmp(&a.importance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let _ = writeln!(msg);
        let _ = writeln!(msg, "*Top articles:*");
        for a in ranked.iter().take(3) {
            let title = truncate_chars(&a.title, 80);
            let category = a.category.as_deref().unwrap_or("N/A");
            let _ = writeln!(
                msg,
                "• <{}|{}> · {} ({:.2})",
                a.link,
                title,
                category,
                a.importance.unwrap_or_default()
            );
            if let Some(summary) = &a.summary {
                let _ = writeln!(msg, "  {}", truncate_chars(summary, 100));
            }
        }
    }

    msg
}
