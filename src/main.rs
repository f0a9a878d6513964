mod analyzer;
mod broker;
mod config;
mod model;
mod news;
mod server;

use broker::{Broker, OandaClient};
use config::load_config;
use news::{NewsProvider, StaticNewsProvider};
use server::AppState;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };
    info!(
        "Using {:?} environment for account {}",
        config.oanda_environment, config.oanda_account_id
    );

    let broker: Arc<dyn Broker> = Arc::new(OandaClient::new(&config));
    let news: Arc<dyn NewsProvider> = Arc::new(StaticNewsProvider::new());

    let state = AppState {
        broker,
        news,
        default_instruments: config.default_instruments.clone(),
    };

    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    info!("fx-advisor listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
