// src/collect/sources.rs
//! Compiled source registry.
//!
//! Every built-in site is one data entry consumed by the two generic
//! fetchers; adding a source means adding a row here. Config-file feeds are
//! collected before this registry, and registry order decides dedup
//! precedence, so keep the order stable.

#[derive(Debug, Clone, Copy)]
pub enum FetchMode {
    /// URLs are syndication documents (RSS/Atom).
    Feed,
    /// URLs are HTML listing pages; article links are recognized by the
    /// marker segment and resolved against the bare origin.
    Scrape {
        base_url: &'static str,
        marker: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub name: &'static str,
    pub mode: FetchMode,
    pub urls: &'static [&'static str],
    /// Feed mode: max entries taken per feed document. Scrape mode: max
    /// candidates across all of the source's pages. `None` means uncapped.
    pub cap: Option<usize>,
}

pub fn builtin_sources() -> &'static [SourceSpec] {
    SOURCES
}

static SOURCES: &[SourceSpec] = &[
    SourceSpec {
        name: "FSA",
        mode: FetchMode::Scrape {
            base_url: "https://www.fsa.go.jp",
            marker: "/news/",
        },
        urls: &["https://www.fsa.go.jp/news/index.html"],
        cap: Some(10),
    },
    SourceSpec {
        name: "NHK News",
        mode: FetchMode::Scrape {
            base_url: "https://www3.nhk.or.jp",
            marker: "/news/",
        },
        urls: &[
            "https://www3.nhk.or.jp/news/",
            "https://www3.nhk.or.jp/news/easy/",
            "https://www3.nhk.or.jp/news/special/",
            "https://www3.nhk.or.jp/news/politics/",
            "https://www3.nhk.or.jp/news/economy/",
            "https://www3.nhk.or.jp/news/society/",
            "https://www3.nhk.or.jp/news/world/",
            "https://www3.nhk.or.jp/news/science/",
            "https://www3.nhk.or.jp/news/sports/",
        ],
        cap: Some(50),
    },
    SourceSpec {
        name: "Investing.com",
        mode: FetchMode::Scrape {
            base_url: "https://jp.investing.com",
            marker: "/news/",
        },
        urls: &[
            "https://jp.investing.com/news/",
            "https://jp.investing.com/news/economic-indicators/",
            "https://jp.investing.com/news/forex-news/",
        ],
        cap: Some(10),
    },
    SourceSpec {
        name: "Bloomberg",
        mode: FetchMode::Feed,
        urls: &["https://feeds.bloomberg.com/markets/news.rss"],
        cap: Some(10),
    },
    SourceSpec {
        name: "Wall Street Journal",
        mode: FetchMode::Feed,
        urls: &[
            "https://feeds.a.dj.com/rss/RSSWorldNews.xml",
            "https://feeds.a.dj.com/rss/RSSMarketsMain.xml",
            "https://feeds.a.dj.com/rss/RSSBusinessNews.xml",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "Business Standard",
        mode: FetchMode::Feed,
        urls: &[
            "https://www.business-standard.com/rss/economy-policy-103.rss",
            "https://www.business-standard.com/rss/markets-102.rss",
            "https://www.business-standard.com/rss/companies-101.rss",
            // fallback feeds; the section ones disappear occasionally
            "https://www.business-standard.com/rss/current-news-1.rss",
            "https://www.business-standard.com/rss/top-stories-1.rss",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "Reuters",
        mode: FetchMode::Feed,
        urls: &[
            "https://feeds.reuters.com/reuters/businessNews",
            "https://feeds.reuters.com/reuters/worldNews",
            "https://feeds.reuters.com/reuters/marketsNews",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "CNBC",
        mode: FetchMode::Feed,
        urls: &[
            "https://www.cnbc.com/id/100003114/device/rss/rss.html",
            "https://www.cnbc.com/id/10000664/device/rss/rss.html",
            "https://www.cnbc.com/id/100727362/device/rss/rss.html",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "Financial Times",
        mode: FetchMode::Feed,
        urls: &[
            "https://www.ft.com/rss/home",
            "https://www.ft.com/rss/world",
            "https://www.ft.com/rss/companies",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "The Economist",
        mode: FetchMode::Feed,
        urls: &[
            "https://www.economist.com/finance-and-economics/rss.xml",
            "https://www.economist.com/business/rss.xml",
            "https://www.economist.com/international/rss.xml",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "Nikkei",
        mode: FetchMode::Scrape {
            base_url: "https://www.nikkei.com",
            marker: "/news/",
        },
        urls: &[
            "https://www.nikkei.com/news/",
            "https://www.nikkei.com/news/politics/",
            "https://www.nikkei.com/news/economy/",
            "https://www.nikkei.com/news/society/",
            "https://www.nikkei.com/news/world/",
            "https://www.nikkei.com/news/technology/",
            "https://www.nikkei.com/news/companies/",
            "https://www.nikkei.com/news/markets/",
            "https://www.nikkei.com/news/finance/",
            "https://www.nikkei.com/news/industry/",
            "https://www.nikkei.com/news/energy/",
            "https://www.nikkei.com/news/automotive/",
            "https://www.nikkei.com/news/electronics/",
            "https://www.nikkei.com/news/construction/",
            "https://www.nikkei.com/news/retail/",
            "https://www.nikkei.com/news/services/",
            "https://www.nikkei.com/news/it/",
            "https://www.nikkei.com/news/media/",
            "https://www.nikkei.com/news/healthcare/",
            "https://www.nikkei.com/news/food/",
            "https://www.nikkei.com/news/chemicals/",
            "https://www.nikkei.com/news/materials/",
            "https://www.nikkei.com/news/machinery/",
            "https://www.nikkei.com/news/steel/",
            "https://www.nikkei.com/news/nonferrous/",
            "https://www.nikkei.com/news/transportation/",
            "https://www.nikkei.com/news/information_communications/",
            "https://www.nikkei.com/news/finance_insurance/",
            "https://www.nikkei.com/news/real_estate/",
        ],
        cap: Some(100),
    },
    SourceSpec {
        name: "Yahoo Finance",
        mode: FetchMode::Feed,
        urls: &[
            "https://feeds.finance.yahoo.com/rss/2.0/headline",
            "https://feeds.finance.yahoo.com/rss/2.0/headline?s=^GSPC",
            "https://feeds.finance.yahoo.com/rss/2.0/headline?s=^DJI",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "MarketWatch",
        mode: FetchMode::Feed,
        urls: &[
            "https://feeds.marketwatch.com/marketwatch/topstories/",
            "https://feeds.marketwatch.com/marketwatch/marketpulse/",
            "https://feeds.marketwatch.com/marketwatch/realheadlines/",
        ],
        cap: Some(5),
    },
    SourceSpec {
        name: "TechCrunch",
        mode: FetchMode::Feed,
        urls: &[
            "https://techcrunch.com/feed/",
            "https://techcrunch.com/category/startups/feed/",
            "https://techcrunch.com/category/enterprise/feed/",
        ],
        cap: Some(5),
    },
];
