// OANDA v3 wire objects. The API encodes decimals as strings; they stay
// strings here and are parsed at the analysis boundary, where unparseable
// values are dropped instead of failing the whole payload.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account: Account,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub margin_used: String,
    #[serde(default)]
    pub margin_available: String,
    #[serde(default)]
    pub open_trade_count: u32,
    #[serde(default, rename = "unrealizedPL")]
    pub unrealized_pl: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub prices: Vec<Price>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    #[serde(default)]
    pub closeout_bid: Option<String>,
    #[serde(default)]
    pub closeout_ask: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBucket {
    pub price: String,
    #[serde(default)]
    pub liquidity: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleResponse {
    #[serde(default)]
    pub instrument: Option<String>,
    #[serde(default)]
    pub granularity: Option<String>,
    #[serde(default)]
    pub candles: Vec<Candle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub mid: Option<CandleMid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleMid {
    pub o: String,
    pub h: String,
    pub l: String,
    pub c: String,
}

impl Candle {
    /// Mid closing price, if the candle carries one and it parses.
    pub fn close(&self) -> Option<f64> {
        self.mid.as_ref()?.c.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentsResponse {
    #[serde(default)]
    pub instruments: Vec<Instrument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub pip_location: Option<i32>,
    #[serde(default)]
    pub margin_rate: Option<String>,
}
