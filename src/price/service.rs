use std::sync::Arc;

use reqwest::Client;
use tracing::warn;

use crate::{
    config::UpstreamConfig,
    error::AppError,
    price::{
        model::PricePoint,
        providers::{CoinGeckoProvider, GeckoTerminalProvider, PriceProvider},
    },
};

/// Ordered price fallback chain. Providers are tried one at a time, in order;
/// the first usable answer wins and is tagged with that provider's source.
#[derive(Clone)]
pub struct PriceService {
    providers: Arc<Vec<Box<dyn PriceProvider>>>,
}

impl PriceService {
    pub fn new(providers: Vec<Box<dyn PriceProvider>>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    /// GeckoTerminal pool price first, CoinGecko on-chain token price second.
    pub fn from_config(http: Client, config: &UpstreamConfig) -> Result<Self, AppError> {
        Ok(Self::new(vec![
            Box::new(GeckoTerminalProvider::new(
                http.clone(),
                &config.gecko_terminal_api,
                &config.pool_address,
            )?),
            Box::new(CoinGeckoProvider::new(http, config)?),
        ]))
    }

    /// Never fails: when no provider answers, the zero-price sentinel is returned.
    pub async fn get_price(&self) -> PricePoint {
        for provider in self.providers.iter() {
            let source = provider.source();

            match provider.fetch_usd().await {
                Ok(usd) => match PricePoint::quoted(source, usd) {
                    Some(point) => return point,
                    None => warn!("{} returned unusable price {}", source, usd),
                },
                Err(e) => warn!("{} price unavailable: {}", source, e),
            }
        }

        PricePoint::unavailable()
    }
}
