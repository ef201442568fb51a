// src/collect/types.rs
use anyhow::Result;

/// One collected news item. `title` is the deduplication key.
///
/// The optional fields are enrichment data (attached by downstream
/// collaborators, e.g. a summarizer); the notifier renders them when present
/// and the sheet writer serializes them only when set.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Article {
    pub source: String,    // e.g., "Reuters", "NHK News"
    pub title: String,
    pub link: String,      // absolute URL
    pub published: String, // feed-provided timestamp, or capture instant for scraped pages
    pub fetched_at: String, // capture instant, RFC 3339 UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Article {
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        published: impl Into<String>,
        fetched_at: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            link: link.into(),
            published: published.into(),
            fetched_at: fetched_at.into(),
            summary: None,
            category: None,
            importance: None,
            rank: None,
        }
    }
}

#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<Article>>;
    fn name(&self) -> &str;
}
