use serde::Deserialize;
use std::fs;

/// Broker environment the service talks to. Practice and live accounts use
/// different API hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Practice,
    Live,
}

impl Environment {
    pub fn api_base(&self) -> &'static str {
        match self {
            Environment::Practice => "https://api-fxpractice.oanda.com",
            Environment::Live => "https://api-fxtrade.oanda.com",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub oanda_api_key: String,
    pub oanda_account_id: String,
    #[serde(default)]
    pub oanda_environment: Environment,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_instruments")]
    pub default_instruments: Vec<String>,
}

fn default_port() -> u16 {
    3000
}

fn default_instruments() -> Vec<String> {
    vec!["EUR_USD".to_string()]
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
