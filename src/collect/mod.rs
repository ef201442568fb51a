// src/collect/mod.rs
pub mod config;
pub mod providers;
pub mod sources;
pub mod types;

use crate::collect::config::FeedConfig;
use crate::collect::providers::feed::FeedSource;
use crate::collect::providers::scrape::ScrapeSource;
use crate::collect::sources::{builtin_sources, FetchMode};
use crate::collect::types::{Article, SourceProvider};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// One-time metrics registration (so series show up on a recorder, if any).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "harvest_articles_total",
            "Articles emitted by source fetchers before deduplication."
        );
        describe_counter!(
            "harvest_kept_total",
            "Articles kept after title deduplication."
        );
        describe_counter!(
            "harvest_dedup_total",
            "Articles dropped as duplicate titles."
        );
        describe_counter!(
            "harvest_source_errors_total",
            "Source fetch/parse errors."
        );
        describe_histogram!("harvest_parse_ms", "Source parse time in milliseconds.");
        describe_gauge!(
            "harvest_last_run_ts",
            "Unix ts when the collection pipeline last ran."
        );
    });
}

/// Clean visible text extracted from HTML: decode entities, collapse
/// whitespace, trim. Applied to scraped anchor text only; feed-provided
/// fields pass through verbatim.
pub fn clean_text(s: &str) -> String {
    let out = html_escape::decode_html_entities(s).to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// Drop records whose `title` was already seen, keeping the first
/// occurrence. Titles are compared exactly as extracted; no case or
/// whitespace folding. Order of survivors follows the input order.
pub fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut keep = Vec::with_capacity(articles.len());
    let mut dropped = 0usize;

    for article in articles {
        if !seen_titles.insert(article.title.clone()) {
            dropped += 1;
            continue;
        }
        keep.push(article);
    }

    counter!("harvest_dedup_total").increment(dropped as u64);
    keep
}

/// Materialize the provider list: config-driven feeds first (file order),
/// then the compiled source registry in registration order. This order
/// determines dedup precedence.
pub fn build_providers(feeds: &[FeedConfig]) -> Vec<Box<dyn SourceProvider>> {
    let mut providers: Vec<Box<dyn SourceProvider>> = Vec::new();
    for feed in feeds {
        providers.push(Box::new(FeedSource::from_config(feed)));
    }
    for spec in builtin_sources() {
        match spec.mode {
            FetchMode::Feed => providers.push(Box::new(FeedSource::from_spec(spec))),
            FetchMode::Scrape { base_url, marker } => providers.push(Box::new(ScrapeSource::new(
                spec.name, base_url, marker, spec.urls, spec.cap,
            ))),
        }
    }
    providers
}

/// Run one collection pass over the given providers.
///
/// Providers are fetched sequentially in order; a failing provider
/// contributes nothing and is logged, never aborting the run. The result is
/// the concatenation of all contributions with duplicate titles removed
/// (first occurrence wins). Never fails; returns an empty vec when every
/// source failed.
pub async fn run_once(providers: &[Box<dyn SourceProvider>]) -> Vec<Article> {
    ensure_metrics_described();

    let mut raw = Vec::new();
    for p in providers {
        match p.fetch_latest().await {
            Ok(mut v) => {
                tracing::info!(source = p.name(), count = v.len(), "source fetched");
                raw.append(&mut v);
            }
            Err(e) => {
                tracing::warn!(error = ?e, source = p.name(), "source error");
                counter!("harvest_source_errors_total").increment(1);
            }
        }
    }

    let kept = dedup_by_title(raw);

    counter!("harvest_kept_total").increment(kept.len() as u64);
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    gauge!("harvest_last_run_ts").set(now as f64);

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(source: &str, title: &str) -> Article {
        Article::new(source, title, "", "", "")
    }

    #[test]
    fn clean_text_decodes_and_collapses() {
        let s = "  Markets&nbsp;rally \n after   Fed decision ";
        assert_eq!(clean_text(s), "Markets rally after Fed decision");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let raw = vec![
            article("A", "X"),
            article("A", "Y"),
            article("B", "Y"),
            article("B", "Z"),
        ];
        let kept = dedup_by_title(raw);
        let titles: Vec<&str> = kept.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["X", "Y", "Z"]);
        // B's "Y" lost to A's; A's survives with its own source
        assert_eq!(kept[1].source, "A");
    }

    #[test]
    fn dedup_is_exact_match_only() {
        let raw = vec![article("A", "Rates hold"), article("B", "rates hold")];
        assert_eq!(dedup_by_title(raw).len(), 2);
    }
}
