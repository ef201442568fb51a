// tests/collector_dedup.rs
use news_harvester::collect::dedup_by_title;
use news_harvester::Article;

fn article(source: &str, title: &str) -> Article {
    Article::new(source, title, "https://example.test/x", "", "")
}

#[test]
fn no_two_records_share_a_title() {
    let raw = vec![
        article("A", "Rates hold"),
        article("B", "Rates hold"),
        article("C", "Rates hold"),
        article("C", "FX intervention"),
    ];
    let kept = dedup_by_title(raw);
    assert_eq!(kept.len(), 2);
    let mut titles: Vec<&str> = kept.iter().map(|a| a.title.as_str()).collect();
    titles.dedup();
    assert_eq!(titles.len(), kept.len());
}

#[test]
fn first_seen_record_survives_with_its_source() {
    let raw = vec![article("A", "Shared"), article("B", "Shared")];
    let kept = dedup_by_title(raw);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].source, "A");
}

#[test]
fn survivor_order_follows_input_order() {
    let raw = vec![
        article("A", "one"),
        article("A", "two"),
        article("B", "one"),
        article("B", "three"),
    ];
    let titles: Vec<String> = dedup_by_title(raw).into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(dedup_by_title(Vec::new()).is_empty());
}
