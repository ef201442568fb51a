// src/collect/providers/feed.rs
use anyhow::Result;
use async_trait::async_trait;
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;

use crate::collect::config::FeedConfig;
use crate::collect::providers::{fetch_text, now_rfc3339};
use crate::collect::sources::SourceSpec;
use crate::collect::types::{Article, SourceProvider};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<AtomText>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    published: Option<String>,
    updated: Option<String>,
}

// Atom text constructs may carry a type attribute; only the content matters.
#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

fn scrub_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

/// Parse a syndication document (RSS 2.0, falling back to Atom) into
/// records. Entry fields are taken verbatim, missing values default to the
/// empty string. An unparseable document yields zero entries, not an error.
/// `cap` bounds the entries taken from this one document.
pub fn parse_feed(source: &str, body: &str, cap: Option<usize>, fetched_at: &str) -> Vec<Article> {
    let t0 = std::time::Instant::now();
    let xml_clean = scrub_entities_for_xml(body);

    let mut out = Vec::new();
    if let Ok(rss) = from_str::<Rss>(&xml_clean) {
        for it in rss.channel.items {
            out.push(Article::new(
                source,
                it.title.unwrap_or_default(),
                it.link.unwrap_or_default(),
                it.pub_date.unwrap_or_default(),
                fetched_at,
            ));
        }
    } else if let Ok(atom) = from_str::<AtomFeed>(&xml_clean) {
        for entry in atom.entries {
            let link = entry
                .links
                .iter()
                .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
                .or_else(|| entry.links.first())
                .and_then(|l| l.href.clone())
                .unwrap_or_default();
            out.push(Article::new(
                source,
                entry.title.and_then(|t| t.value).unwrap_or_default(),
                link,
                entry.published.or(entry.updated).unwrap_or_default(),
                fetched_at,
            ));
        }
    } else {
        tracing::warn!(source, "unparseable feed document");
    }

    if let Some(cap) = cap {
        out.truncate(cap);
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("harvest_parse_ms").record(ms);
    counter!("harvest_articles_total").increment(out.len() as u64);
    out
}

/// Feed-mode source fetcher. Config-driven instances carry one URL and no
/// cap; compiled instances may carry several feed URLs with a per-document
/// cap. A failing URL is logged and the next attempted; the source errors
/// only when every URL failed and nothing was collected.
pub struct FeedSource {
    name: String,
    urls: Vec<String>,
    cap: Option<usize>,
    client: Client,
}

impl FeedSource {
    pub fn from_config(feed: &FeedConfig) -> Self {
        Self {
            name: feed.name.clone(),
            urls: vec![feed.url.clone()],
            cap: None,
            client: Client::new(),
        }
    }

    pub fn from_spec(spec: &SourceSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            urls: spec.urls.iter().map(|u| u.to_string()).collect(),
            cap: spec.cap,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SourceProvider for FeedSource {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let mut out = Vec::new();
        let mut last_err: Option<anyhow::Error> = None;

        for url in &self.urls {
            let body = match fetch_text(&self.client, url).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::warn!(error = ?e, source = %self.name, %url, "feed fetch failed");
                    counter!("harvest_source_errors_total").increment(1);
                    last_err = Some(e);
                    continue;
                }
            };
            let fetched_at = now_rfc3339();
            out.extend(parse_feed(&self.name, &body, self.cap, &fetched_at));
        }

        if out.is_empty() {
            if let Some(e) = last_err {
                return Err(e.context(format!("fetching {} feeds", self.name)));
            }
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
