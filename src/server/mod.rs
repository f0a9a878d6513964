// Server module: HTTP surface proxying the broker and exposing the analysis
// pipeline.

pub mod error;
pub mod handlers;

use crate::broker::Broker;
use crate::news::NewsProvider;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub broker: Arc<dyn Broker>,
    pub news: Arc<dyn NewsProvider>,
    /// Instruments priced when a request names none.
    pub default_instruments: Vec<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info))
        .route("/api/account", get(handlers::account))
        .route("/api/pricing", get(handlers::pricing))
        .route("/api/candles/{instrument}", get(handlers::candles))
        .route("/api/instruments", get(handlers::instruments))
        .route("/api/news", get(handlers::news))
        .route("/api/analyze/{instrument}", get(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::objects::{
        AccountResponse, Candle, CandleMid, CandleResponse, InstrumentsResponse, PricingResponse,
    };
    use crate::model::BrokerError;
    use crate::news::StaticNewsProvider;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Broker stub: account lookups fail, market data succeeds with a fixed
    /// rising candle series.
    struct FakeBroker;

    fn rising_candles() -> Vec<Candle> {
        [1.10, 1.10, 1.10, 1.105, 1.11, 1.112, 1.115, 1.118, 1.12, 1.125]
            .iter()
            .map(|close| Candle {
                complete: true,
                volume: 100,
                time: "2026-02-19T10:00:00.000000000Z".to_string(),
                mid: Some(CandleMid {
                    o: close.to_string(),
                    h: close.to_string(),
                    l: close.to_string(),
                    c: close.to_string(),
                }),
            })
            .collect()
    }

    #[async_trait::async_trait]
    impl Broker for FakeBroker {
        async fn account(&self) -> Result<AccountResponse, BrokerError> {
            Err(BrokerError::Status {
                status: 401,
                body: "unauthorized".to_string(),
            })
        }

        async fn pricing(&self, _instruments: &[String]) -> Result<PricingResponse, BrokerError> {
            Ok(PricingResponse {
                time: None,
                prices: vec![],
            })
        }

        async fn candles(
            &self,
            instrument: &str,
            granularity: &str,
            _count: u32,
        ) -> Result<CandleResponse, BrokerError> {
            Ok(CandleResponse {
                instrument: Some(instrument.to_string()),
                granularity: Some(granularity.to_string()),
                candles: rising_candles(),
            })
        }

        async fn instruments(&self) -> Result<InstrumentsResponse, BrokerError> {
            Ok(InstrumentsResponse {
                instruments: vec![],
            })
        }
    }

    fn test_router() -> Router {
        router(AppState {
            broker: Arc::new(FakeBroker),
            news: Arc::new(StaticNewsProvider::new()),
            default_instruments: vec!["EUR_USD".to_string()],
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn analyze_runs_the_full_pipeline() {
        let (status, body) = get_json("/api/analyze/EUR_USD").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["instrument"], "EUR_USD");
        assert_eq!(body["technical"]["trend"], "bullish");
        // One of the two static articles mentions the pair: relevance 50.
        assert_eq!(body["sentiment"]["sentiment"], "positive");
        assert_eq!(body["sentiment"]["relevance"], 50.0);
        // 50 base + 20 aligned + 10 relevance, no RSI on ten candles.
        assert_eq!(body["recommendation"]["action"], "buy");
        assert_eq!(body["recommendation"]["confidence"], 80);
        assert_eq!(body["recommendation"]["riskLevel"], "medium");
    }

    #[tokio::test]
    async fn candle_proxy_applies_defaults() {
        let (status, body) = get_json("/api/candles/EUR_USD").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["granularity"], "H1");
        assert_eq!(body["candles"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn broker_failure_maps_to_fixed_error_body() {
        let (status, body) = get_json("/api/account").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch account data");
    }

    #[tokio::test]
    async fn news_feed_reports_success() {
        let (status, body) = get_json("/api/news").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["articles"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn pricing_accepts_an_instrument_list() {
        let (status, _) = get_json("/api/pricing?instruments=EUR_USD,USD_JPY").await;
        assert_eq!(status, StatusCode::OK);
    }
}
