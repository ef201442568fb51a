// src/sink/sheets.rs
use anyhow::{Context, Result};
use reqwest::Client;

use crate::collect::config::SheetsConfig;
use crate::collect::types::Article;

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const TOKEN_ENV: &str = "GOOGLE_SHEETS_TOKEN";

const HEADER: [&str; 6] = ["source", "title", "link", "published", "fetched_at", "summary"];

/// Writes one run's articles to a Google Sheets worksheet: clear, then a
/// header row plus one row per article. Authenticates with a ready access
/// token from the environment; acquiring and refreshing that token is the
/// operator's concern.
pub struct SheetsWriter {
    spreadsheet_id: String,
    worksheet: String,
    token: String,
    client: Client,
}

impl SheetsWriter {
    pub fn new(spreadsheet_id: String, worksheet: String, token: String) -> Self {
        Self {
            spreadsheet_id,
            worksheet,
            token,
            client: Client::new(),
        }
    }

    /// None when no spreadsheet is configured or no access token is in the
    /// environment; the job then skips the write.
    pub fn from_config(cfg: &SheetsConfig) -> Option<Self> {
        let spreadsheet_id = cfg.spreadsheet_id.clone()?;
        match std::env::var(TOKEN_ENV) {
            Ok(token) => Some(Self::new(spreadsheet_id, cfg.worksheet.clone(), token)),
            Err(_) => {
                tracing::warn!("sheets sink configured but GOOGLE_SHEETS_TOKEN unset");
                None
            }
        }
    }

    /// Errors propagate to the caller; the job reports them and ends the
    /// run without a summary.
    pub async fn write(&self, articles: &[Article]) -> Result<()> {
        let clear_url = format!(
            "{API_BASE}/{}/values/{}:clear",
            self.spreadsheet_id, self.worksheet
        );
        self.client
            .post(&clear_url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .context("sheets clear")?
            .error_for_status()
            .context("sheets clear non-2xx")?;

        let values = rows(articles);
        tracing::info!(rows = values.len(), sheet = %self.worksheet, "writing rows");

        let update_url = format!(
            "{API_BASE}/{}/values/{}?valueInputOption=RAW",
            self.spreadsheet_id, self.worksheet
        );
        self.client
            .put(&update_url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({
                "range": self.worksheet,
                "majorDimension": "ROWS",
                "values": values,
            }))
            .send()
            .await
            .context("sheets update")?
            .error_for_status()
            .context("sheets update non-2xx")?;

        Ok(())
    }
}

fn rows(articles: &[Article]) -> Vec<Vec<String>> {
    let mut values = Vec::with_capacity(articles.len() + 1);
    values.push(HEADER.iter().map(|s| s.to_string()).collect());
    for a in articles {
        values.push(vec![
            a.source.clone(),
            a.title.clone(),
            a.link.clone(),
            a.published.clone(),
            a.fetched_at.clone(),
            a.summary.clone().unwrap_or_default(),
        ]);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_with_header_and_keep_order() {
        let mut second = Article::new("B", "t2", "l2", "p2", "f2");
        second.summary = Some("short".to_string());
        let articles = vec![Article::new("A", "t1", "l1", "p1", "f1"), second];

        let values = rows(&articles);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0][0], "source");
        assert_eq!(values[1], vec!["A", "t1", "l1", "p1", "f1", ""]);
        assert_eq!(values[2][5], "short");
    }
}
