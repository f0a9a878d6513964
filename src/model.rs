// Core structs shared by the analyzer, broker, news and server modules.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of the recent price movement of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
    /// Not enough valid data to classify.
    Unknown,
}

/// Result of analyzing one candle series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAnalysis {
    pub trend: Trend,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub rsi: Option<f64>,
    /// Closing prices that survived parsing, oldest first.
    pub price_levels: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Result of scoring a news article set against one instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// Share of articles mentioning the instrument, in percent.
    pub relevance: f64,
    /// Titles of up to the first three relevant articles.
    pub key_points: Vec<String>,
    pub total_relevant: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Risk tier is a fixed function of the final confidence score.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 80 {
            RiskLevel::Low
        } else if confidence < 60 {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        }
    }
}

/// Fused trading recommendation for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: TradeAction,
    /// Certainty score, always in 10..=100.
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub reasoning: String,
}

/// News article as supplied by a news source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
}

/// Combined payload of one full analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub instrument: String,
    pub technical: TechnicalAnalysis,
    pub sentiment: SentimentAnalysis,
    pub recommendation: Recommendation,
}

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("broker responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news source unavailable: {0}")]
    Unavailable(String),
}
