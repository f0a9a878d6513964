// Broker module: REST client and wire objects for the OANDA v3 API.

pub mod client;
pub mod objects;
pub mod traits;

pub use client::OandaClient;
pub use traits::Broker;
