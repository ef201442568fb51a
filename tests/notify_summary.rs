// tests/notify_summary.rs
use news_harvester::notify::slack::render_summary;
use news_harvester::notify::RunSummary;
use news_harvester::Article;

fn article(source: &str, title: &str) -> Article {
    Article::new(source, title, "https://example.test/a", "", "")
}

#[test]
fn per_source_counts_sort_by_count_then_name() {
    let articles = vec![
        article("Reuters", "one"),
        article("Bloomberg", "two"),
        article("Reuters", "three"),
        article("CNBC", "four"),
    ];
    let summary = RunSummary::new(&articles, "202508");
    assert_eq!(summary.total, 4);
    assert_eq!(
        summary.per_source,
        vec![
            ("Reuters".to_string(), 2),
            ("Bloomberg".to_string(), 1),
            ("CNBC".to_string(), 1),
        ]
    );
}

#[test]
fn plain_records_render_without_optional_blocks() {
    let articles = vec![article("Reuters", "Central bank holds")];
    let summary = RunSummary::new(&articles, "202508");
    let msg = render_summary(&summary, &articles);

    assert!(msg.contains("Articles: 1"));
    assert!(msg.contains("Target sheet: 202508"));
    assert!(msg.contains("• Reuters: 1"));
    assert!(!msg.contains("Per category"));
    assert!(!msg.contains("Top articles"));
}

#[test]
fn enriched_records_render_categories_and_top_three() {
    let mut articles = Vec::new();
    for (i, imp) in [0.2_f64, 0.9, 0.5, 0.7].iter().enumerate() {
        let mut a = article("Reuters", &format!("Headline number {i} with some length"));
        a.importance = Some(*imp);
        a.category = Some(if i % 2 == 0 { "markets" } else { "policy" }.to_string());
        a.summary = Some("A short digest of the story".to_string());
        articles.push(a);
    }
    let summary = RunSummary::new(&articles, "202508");
    let msg = render_summary(&summary, &articles);

    assert!(msg.contains("*Per category:*"));
    assert!(msg.contains("• markets: 2"));
    assert!(msg.contains("• policy: 2"));

    assert!(msg.contains("*Top articles:*"));
    // top three by importance: 0.9, 0.7, 0.5; the 0.2 entry stays out
    assert!(msg.contains("Headline number 1"));
    assert!(msg.contains("Headline number 3"));
    assert!(msg.contains("Headline number 2"));
    assert!(!msg.contains("Headline number 0 "));
    assert!(msg.contains("A short digest of the story"));
}

#[test]
fn long_titles_are_truncated_for_the_top_block() {
    let long_title = "X".repeat(95);
    let mut a = article("Reuters", &long_title);
    a.importance = Some(1.0);
    let articles = vec![a];
    let summary = RunSummary::new(&articles, "202508");
    let msg = render_summary(&summary, &articles);

    let truncated = format!("{}...", "X".repeat(80));
    assert!(msg.contains(&truncated));
    assert!(!msg.contains(&"X".repeat(81)));
}
