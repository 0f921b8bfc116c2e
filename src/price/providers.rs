use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::{ApiKey, UpstreamConfig},
    error::{AppError, FetchError},
    price::model::{is_usable_price, PriceSource},
    upstream::endpoint,
    utils::cache::revalidate_hint,
};

pub const GECKOTERMINAL_REVALIDATE: Duration = Duration::from_secs(15);
pub const COINGECKO_REVALIDATE: Duration = Duration::from_secs(20);

/// One link of the price fallback chain.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    fn source(&self) -> PriceSource;

    /// USD price, or why this provider could not give a usable one.
    async fn fetch_usd(&self) -> Result<f64, FetchError>;
}

/// Pool price lookup: `{base}/pools/{pool}` → `data.attributes.base_token_price_usd`.
#[derive(Clone, Debug)]
pub struct GeckoTerminalProvider {
    http: Client,
    url: Url,
}

impl GeckoTerminalProvider {
    pub fn new(http: Client, base: &str, pool_address: &str) -> Result<Self, AppError> {
        let url = endpoint(base, &["pools", pool_address])?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl PriceProvider for GeckoTerminalProvider {
    fn source(&self) -> PriceSource {
        PriceSource::GeckoTerminal
    }

    async fn fetch_usd(&self) -> Result<f64, FetchError> {
        debug!("Fetching pool price from {}", self.url);
        let request = self
            .http
            .get(self.url.clone())
            .header(header::CACHE_CONTROL, revalidate_hint(GECKOTERMINAL_REVALIDATE));

        let json = get_json(request).await?;
        parse_price(json.pointer("/data/attributes/base_token_price_usd"))
    }
}

/// On-chain token price lookup:
/// `{base}/onchain/networks/{chain}/tokens/{address}` → `data.attributes.price_usd`.
#[derive(Clone)]
pub struct CoinGeckoProvider {
    http: Client,
    url: Url,
    api_key: Option<ApiKey>,
}

impl CoinGeckoProvider {
    pub fn new(http: Client, config: &UpstreamConfig) -> Result<Self, AppError> {
        let chain_id = config.chain_id.to_string();
        let url = endpoint(
            &config.coingecko_api,
            &["onchain", "networks", &chain_id, "tokens", &config.token_address],
        )?;

        Ok(Self {
            http,
            url,
            api_key: config.coingecko_api_key.clone(),
        })
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn source(&self) -> PriceSource {
        PriceSource::CoinGecko
    }

    async fn fetch_usd(&self) -> Result<f64, FetchError> {
        // Logged without the query string so the key never reaches the logs
        debug!("Fetching token price from {}", self.url);
        let mut request = self
            .http
            .get(self.url.clone())
            .header(header::CACHE_CONTROL, revalidate_hint(COINGECKO_REVALIDATE));

        if let Some(key) = &self.api_key {
            request = request.query(&[("x_cg_pro_api_key", key.expose())]);
        }

        let json = get_json(request).await?;
        parse_price(json.pointer("/data/attributes/price_usd"))
    }
}

async fn get_json(request: RequestBuilder) -> Result<Value, FetchError> {
    let resp = request.send().await?;

    if !resp.status().is_success() {
        return Err(FetchError::Status(resp.status().as_u16()));
    }

    Ok(resp.json::<Value>().await?)
}

/// Providers report prices either as decimal strings or as JSON numbers.
/// Missing, unparsable, zero, negative and non-finite values all fail.
pub fn parse_price(value: Option<&Value>) -> Result<f64, FetchError> {
    let price = match value {
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FetchError::Malformed(format!("unparsable price {:?}", s)))?,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FetchError::Malformed(format!("unrepresentable price {}", n)))?,
        Some(Value::Null) | None => {
            return Err(FetchError::Malformed("price field missing".into()));
        }
        Some(other) => {
            return Err(FetchError::Malformed(format!("unexpected price value {}", other)));
        }
    };

    if !is_usable_price(price) {
        return Err(FetchError::Malformed(format!("no usable price ({})", price)));
    }

    Ok(price)
}
