// News module: pluggable article source for the sentiment analyzer.

use crate::model::{Article, NewsError};
use chrono::{TimeZone, Utc};

/// Source of market news articles. Swappable without touching the analyzers.
#[async_trait::async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>, NewsError>;
}

/// Fixed article feed standing in for a real news API integration.
pub struct StaticNewsProvider;

impl StaticNewsProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl NewsProvider for StaticNewsProvider {
    async fn fetch_articles(&self) -> Result<Vec<Article>, NewsError> {
        Ok(vec![
            Article {
                title: "Market Update: EUR/USD Shows Strong Momentum".to_string(),
                description: "The EUR/USD pair has shown strong momentum today amid positive economic indicators.".to_string(),
                published_at: Utc.with_ymd_and_hms(2026, 2, 19, 10, 0, 0).unwrap(),
                source: "Financial Times".to_string(),
            },
            Article {
                title: "Cryptocurrency Markets Volatile After Regulatory Announcement".to_string(),
                description: "Major cryptocurrencies experience volatility following new regulatory guidelines.".to_string(),
                published_at: Utc.with_ymd_and_hms(2026, 2, 19, 9, 30, 0).unwrap(),
                source: "Bloomberg".to_string(),
            },
        ])
    }
}
