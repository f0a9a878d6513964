use crate::broker::objects::{AccountResponse, CandleResponse, InstrumentsResponse, PricingResponse};
use crate::model::BrokerError;

/// Read-only view of a broker account and its markets.
#[async_trait::async_trait]
pub trait Broker: Send + Sync {
    async fn account(&self) -> Result<AccountResponse, BrokerError>;
    async fn pricing(&self, instruments: &[String]) -> Result<PricingResponse, BrokerError>;
    async fn candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<CandleResponse, BrokerError>;
    async fn instruments(&self) -> Result<InstrumentsResponse, BrokerError>;
}
