// src/collect/providers/scrape.rs
use anyhow::Result;
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::collect::clean_text;
use crate::collect::providers::{fetch_text, now_rfc3339};
use crate::collect::types::{Article, SourceProvider};

/// Join a relative href to the source's bare origin. Targets starting with
/// "/" attach directly; anything else gets a single separating slash.
pub(crate) fn resolve_link(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{base_url}{href}")
    } else {
        format!("{base_url}/{href}")
    }
}

/// Scan every hyperlink in `body` and keep the ones that look like article
/// links: the href contains the site's marker segment, is not already
/// absolute, and the visible text is longer than 10 characters. Relative
/// targets are resolved against `base_url`. `cap` bounds how many
/// candidates are taken; `stamp` becomes both `published` and `fetched_at`
/// since listing pages carry no publish time.
pub fn extract_articles(
    source: &str,
    body: &str,
    base_url: &str,
    marker: &str,
    cap: Option<usize>,
    stamp: &str,
) -> Vec<Article> {
    let t0 = std::time::Instant::now();
    let document = Html::parse_document(body);
    let anchors = Selector::parse("a[href]").unwrap();

    let mut out = Vec::new();
    for element in document.select(&anchors) {
        if cap.is_some_and(|c| out.len() >= c) {
            break;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !href.contains(marker) || href.starts_with("http") {
            continue;
        }
        let title = clean_text(&element.text().collect::<Vec<_>>().join(" "));
        if title.chars().count() <= 10 {
            continue;
        }
        out.push(Article::new(
            source,
            title,
            resolve_link(base_url, href),
            stamp,
            stamp,
        ));
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("harvest_parse_ms").record(ms);
    counter!("harvest_articles_total").increment(out.len() as u64);
    out
}

/// Scrape-mode source fetcher: one or more listing pages scanned for
/// article links. Per-URL failures are logged and skipped; the source
/// errors only when every page failed and nothing was collected.
pub struct ScrapeSource {
    name: String,
    base_url: String,
    marker: String,
    urls: Vec<String>,
    cap: Option<usize>,
    client: Client,
}

impl ScrapeSource {
    pub fn new(
        name: &str,
        base_url: &str,
        marker: &str,
        urls: &[&str],
        cap: Option<usize>,
    ) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            marker: marker.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
            cap,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SourceProvider for ScrapeSource {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let mut out = Vec::new();
        let mut last_err: Option<anyhow::Error> = None;

        for url in &self.urls {
            if self.cap.is_some_and(|c| out.len() >= c) {
                break;
            }
            let body = match fetch_text(&self.client, url).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::warn!(error = ?e, source = %self.name, %url, "page fetch failed");
                    counter!("harvest_source_errors_total").increment(1);
                    last_err = Some(e);
                    continue;
                }
            };
            // Html is parsed in the sync helper so it never lives across an
            // await; the provider future stays Send.
            let stamp = now_rfc3339();
            let remaining = self.cap.map(|c| c - out.len());
            out.extend(extract_articles(
                &self.name,
                &body,
                &self.base_url,
                &self.marker,
                remaining,
                &stamp,
            ));
        }

        if out.is_empty() {
            if let Some(e) = last_err {
                return Err(e.context(format!("scraping {}", self.name)));
            }
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_slash_joins_to_origin() {
        assert_eq!(
            resolve_link("https://example.com", "/news/123"),
            "https://example.com/news/123"
        );
    }

    #[test]
    fn bare_relative_gets_single_slash() {
        assert_eq!(
            resolve_link("https://example.com", "news/123"),
            "https://example.com/news/123"
        );
    }
}
