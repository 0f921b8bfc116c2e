use std::env;
use std::fmt;
use std::time::Duration as StdDuration;

use chrono::Duration;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub upstream: UpstreamConfig,
    pub site: SiteConfig,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

/// Everything the network and price fetchers need to reach their upstreams.
///
/// Built once at startup and handed to each fetcher when it is constructed;
/// the fetchers never read the environment themselves.
#[derive(Debug, Clone, Validate)]
pub struct UpstreamConfig {
    /// JSON-RPC endpoint queried for `eth_blockNumber` and `net_peerCount`.
    #[validate(url)]
    pub rpc_url: String,
    /// GeckoTerminal network base, e.g. `.../api/v2/networks/solana`.
    #[validate(url)]
    pub gecko_terminal_api: String,
    /// CoinGecko API base, e.g. `.../api/v3`.
    #[validate(url)]
    pub coingecko_api: String,
    pub coingecko_api_key: Option<ApiKey>,
    #[validate(length(min = 1))]
    pub pool_address: String,
    #[validate(length(min = 1))]
    pub token_address: String,
    pub chain_id: u64,
    /// Upper bound for every outbound call.
    pub timeout: StdDuration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://rpc.marscredit.xyz".into(),
            gecko_terminal_api: "https://api.geckoterminal.com/api/v2/networks/solana".into(),
            coingecko_api: "https://api.coingecko.com/api/v3".into(),
            coingecko_api_key: None,
            pool_address: "placeholder-pool-address".into(),
            token_address: "placeholder-token-address".into(),
            chain_id: 1,
            timeout: StdDuration::from_secs(5),
        }
    }
}

/// Provider API key. Never printed.
#[derive(Clone, PartialEq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Validate)]
pub struct SiteConfig {
    pub name: String,
    #[validate(url)]
    pub url: String,
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Mars Credit".into(),
            url: "https://marscredit.org".into(),
            description: "Mineable, EVM-compatible Layer-1 tuned for the Red Planet.".into(),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub rpc_fallback: Option<String>,
    #[validate(url)]
    pub explorer: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 12345,
            name: "Mars Credit".into(),
            symbol: "MARS".into(),
            decimals: 18,
            rpc_fallback: None,
            explorer: "https://explorer.marscredit.org".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let app_env_str = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // Upstream providers
        let defaults = UpstreamConfig::default();

        let timeout_str = env::var("UPSTREAM_TIMEOUT").unwrap_or_else(|_| "5s".into());
        let timeout = parse_timeout(&timeout_str)?;

        let chain_id = match non_empty_var("MARS_PRICE_CHAIN_ID") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| AppError::ConfigError("Invalid MARS_PRICE_CHAIN_ID".into()))?,
            None => defaults.chain_id,
        };

        let upstream = UpstreamConfig {
            rpc_url: non_empty_var("MARS_RPC_PRIMARY").unwrap_or(defaults.rpc_url),
            gecko_terminal_api: non_empty_var("GECKOTERMINAL_API")
                .unwrap_or(defaults.gecko_terminal_api),
            coingecko_api: non_empty_var("COINGECKO_API").unwrap_or(defaults.coingecko_api),
            coingecko_api_key: non_empty_var("COINGECKO_API_KEY").map(ApiKey::new),
            pool_address: non_empty_var("MARS_POOL_ADDRESS").unwrap_or(defaults.pool_address),
            token_address: non_empty_var("MARS_TOKEN_ADDRESS").unwrap_or(defaults.token_address),
            chain_id,
            timeout,
        };
        upstream.validate()?;

        // Site metadata
        let site_defaults = SiteConfig::default();
        let site = SiteConfig {
            url: non_empty_var("SITE_URL").unwrap_or(site_defaults.url),
            ..site_defaults
        };
        site.validate()?;

        // Chain metadata
        let chain_defaults = ChainConfig::default();
        let chain = ChainConfig {
            chain_id: match non_empty_var("MARS_CHAIN_ID") {
                Some(raw) => raw
                    .parse::<u64>()
                    .map_err(|_| AppError::ConfigError("Invalid MARS_CHAIN_ID".into()))?,
                None => chain_defaults.chain_id,
            },
            name: non_empty_var("MARS_CHAIN_NAME").unwrap_or(chain_defaults.name),
            symbol: non_empty_var("MARS_SYMBOL").unwrap_or(chain_defaults.symbol),
            decimals: match non_empty_var("MARS_DECIMALS") {
                Some(raw) => raw
                    .parse::<u8>()
                    .map_err(|_| AppError::ConfigError("Invalid MARS_DECIMALS".into()))?,
                None => chain_defaults.decimals,
            },
            rpc_fallback: non_empty_var("MARS_RPC_FALLBACK"),
            explorer: non_empty_var("MARS_EXPLORER_URL").unwrap_or(chain_defaults.explorer),
        };
        chain.validate()?;

        Ok(Self {
            port,
            host,
            app_env,
            upstream,
            site,
            chain,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// A zero timeout would fail every upstream call before it starts.
fn parse_timeout(raw: &str) -> Result<StdDuration, AppError> {
    let timeout = parse_duration(raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid UPSTREAM_TIMEOUT: {}", e)))?
        .to_std()
        .map_err(|_| AppError::ConfigError("Invalid UPSTREAM_TIMEOUT: negative".into()))?;

    if timeout.is_zero() {
        return Err(AppError::ConfigError("UPSTREAM_TIMEOUT must be positive".into()));
    }

    Ok(timeout)
}

fn parse_duration(duration_str: &str) -> Result<Duration, &'static str> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("Duration string is empty");
    }

    // Extract the number and unit parts
    let len = duration_str.len();
    let (num_part, unit_part) = duration_str.split_at(
        duration_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .unwrap_or(len),
    );

    let num = num_part.parse::<i64>().map_err(|_| "Invalid number")?;

    let duration = match unit_part {
        "ms" => Duration::try_milliseconds(num),
        "s" => Duration::try_seconds(num),
        "m" => Duration::try_minutes(num),
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        _ => return Err("Unknown time unit, use ms, s, m, h, or d"),
    };

    duration.ok_or("Duration out of range")
}
