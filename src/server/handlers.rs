use crate::analyzer::{recommendation, sentiment, technical};
use crate::broker::objects::{AccountResponse, CandleResponse, InstrumentsResponse, PricingResponse};
use crate::model::{AnalysisReport, Article};
use crate::server::AppState;
use crate::server::error::ApiError;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub instruments: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandleQuery {
    pub granularity: Option<String>,
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct NewsFeed {
    pub status: &'static str,
    pub articles: Vec<Article>,
}

pub async fn info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn account(State(state): State<AppState>) -> Result<Json<AccountResponse>, ApiError> {
    let data = state.broker.account().await.map_err(|e| {
        warn!("account request failed: {e}");
        ApiError::internal("Failed to fetch account data")
    })?;
    Ok(Json(data))
}

pub async fn pricing(
    State(state): State<AppState>,
    Query(query): Query<PricingQuery>,
) -> Result<Json<PricingResponse>, ApiError> {
    let instruments: Vec<String> = match query.instruments {
        Some(list) => list.split(',').map(str::to_string).collect(),
        None => state.default_instruments.clone(),
    };

    let data = state.broker.pricing(&instruments).await.map_err(|e| {
        warn!("pricing request failed: {e}");
        ApiError::internal("Failed to fetch pricing data")
    })?;
    Ok(Json(data))
}

pub async fn candles(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<CandleResponse>, ApiError> {
    let granularity = query.granularity.unwrap_or_else(|| "H1".to_string());
    let count = query.count.unwrap_or(500);

    let data = state
        .broker
        .candles(&instrument, &granularity, count)
        .await
        .map_err(|e| {
            warn!("candle request failed: {e}");
            ApiError::internal("Failed to fetch candle data")
        })?;
    Ok(Json(data))
}

pub async fn instruments(
    State(state): State<AppState>,
) -> Result<Json<InstrumentsResponse>, ApiError> {
    let data = state.broker.instruments().await.map_err(|e| {
        warn!("instrument request failed: {e}");
        ApiError::internal("Failed to fetch instruments")
    })?;
    Ok(Json(data))
}

pub async fn news(State(state): State<AppState>) -> Result<Json<NewsFeed>, ApiError> {
    let articles = state.news.fetch_articles().await.map_err(|e| {
        warn!("news request failed: {e}");
        ApiError::internal("Failed to fetch news data")
    })?;
    Ok(Json(NewsFeed {
        status: "success",
        articles,
    }))
}

/// Runs the full pipeline for one instrument: candles and news are fetched
/// concurrently, then handed to the pure analyzers.
pub async fn analyze(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let granularity = query.granularity.unwrap_or_else(|| "M15".to_string());
    let count = query.count.unwrap_or(500);

    let (candles, articles) = futures::future::join(
        state.broker.candles(&instrument, &granularity, count),
        state.news.fetch_articles(),
    )
    .await;

    let candles = candles.map_err(|e| {
        warn!("candle fetch for analysis failed: {e}");
        ApiError::internal("Failed to run analysis")
    })?;
    let articles = articles.map_err(|e| {
        warn!("news fetch for analysis failed: {e}");
        ApiError::internal("Failed to run analysis")
    })?;

    let technical = technical::analyze(&candles.candles);
    let sentiment = sentiment::analyze(&articles, &instrument);
    let recommendation = recommendation::fuse(&technical, &sentiment, &instrument);

    Ok(Json(AnalysisReport {
        instrument,
        technical,
        sentiment,
        recommendation,
    }))
}
