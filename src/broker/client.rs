use crate::broker::objects::{AccountResponse, CandleResponse, InstrumentsResponse, PricingResponse};
use crate::broker::traits::Broker;
use crate::config::AppConfig;
use crate::model::BrokerError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// REST client for one OANDA account.
pub struct OandaClient {
    client: Client,
    base_url: String,
    account_id: String,
    api_key: String,
}

impl OandaClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.oanda_environment.api_base().to_string(),
            account_id: config.oanda_account_id.clone(),
            api_key: config.oanda_api_key.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BrokerError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            return Err(BrokerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl Broker for OandaClient {
    async fn account(&self) -> Result<AccountResponse, BrokerError> {
        self.get_json(&format!("/v3/accounts/{}", self.account_id), &[])
            .await
    }

    async fn pricing(&self, instruments: &[String]) -> Result<PricingResponse, BrokerError> {
        self.get_json(
            &format!("/v3/accounts/{}/pricing", self.account_id),
            &[("instruments", instruments.join(","))],
        )
        .await
    }

    async fn candles(
        &self,
        instrument: &str,
        granularity: &str,
        count: u32,
    ) -> Result<CandleResponse, BrokerError> {
        self.get_json(
            &format!("/v3/instruments/{}/candles", instrument),
            &[
                ("granularity", granularity.to_string()),
                ("count", count.to_string()),
            ],
        )
        .await
    }

    async fn instruments(&self) -> Result<InstrumentsResponse, BrokerError> {
        self.get_json(&format!("/v3/accounts/{}/instruments", self.account_id), &[])
            .await
    }
}
