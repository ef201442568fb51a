// tests/collector_pipeline.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use news_harvester::collect::run_once;
use news_harvester::collect::types::{Article, SourceProvider};

struct StaticProvider {
    name: &'static str,
    titles: Vec<&'static str>,
}

#[async_trait]
impl SourceProvider for StaticProvider {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        Ok(self
            .titles
            .iter()
            .map(|t| {
                Article::new(
                    self.name,
                    *t,
                    "https://example.test/x",
                    "",
                    "2025-08-05T08:00:00Z",
                )
            })
            .collect())
    }
    fn name(&self) -> &str {
        self.name
    }
}

struct FailingProvider;

#[async_trait]
impl SourceProvider for FailingProvider {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        Err(anyhow!("connection refused"))
    }
    fn name(&self) -> &str {
        "Broken"
    }
}

#[tokio::test]
async fn first_wins_across_sources() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(StaticProvider {
            name: "A",
            titles: vec!["X", "Y"],
        }),
        Box::new(StaticProvider {
            name: "B",
            titles: vec!["Y", "Z"],
        }),
    ];

    let out = run_once(&providers).await;
    let titles: Vec<&str> = out.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["X", "Y", "Z"]);
    // B's duplicate "Y" was dropped, so the survivor belongs to A
    assert_eq!(out[1].source, "A");
}

#[tokio::test]
async fn failing_source_does_not_abort_the_run() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(FailingProvider),
        Box::new(StaticProvider {
            name: "B",
            titles: vec!["Survivor headline"],
        }),
    ];

    let out = run_once(&providers).await;
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].source, "B");
}

#[tokio::test]
async fn all_sources_failing_yield_empty_not_error() {
    let providers: Vec<Box<dyn SourceProvider>> =
        vec![Box::new(FailingProvider), Box::new(FailingProvider)];
    assert!(run_once(&providers).await.is_empty());
}

#[tokio::test]
async fn output_follows_provider_registration_order() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(StaticProvider {
            name: "First",
            titles: vec!["Alpha headline", "Beta headline"],
        }),
        Box::new(StaticProvider {
            name: "Second",
            titles: vec!["Gamma headline"],
        }),
    ];

    let out = run_once(&providers).await;
    let sources: Vec<&str> = out.iter().map(|a| a.source.as_str()).collect();
    assert_eq!(sources, vec!["First", "First", "Second"]);
}
