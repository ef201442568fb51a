pub mod slack;

pub use slack::SlackNotifier;

use crate::collect::types::Article;
use std::collections::BTreeMap;

/// What a completed run looked like, for the chat summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub per_source: Vec<(String, usize)>, // count desc, then name
    pub sheet_name: String,               // e.g. "202508"
    pub ran_at: String,                   // local wall clock
}

impl RunSummary {
    pub fn new(articles: &[Article], sheet_name: impl Into<String>) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for a in articles {
            *counts.entry(a.source.as_str()).or_default() += 1;
        }
        let mut per_source: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(s, n)| (s.to_string(), n))
            .collect();
        per_source.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total: articles.len(),
            per_source,
            sheet_name: sheet_name.into(),
            ran_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
