use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ChainConfig, UpstreamConfig};

/// Public chain parameters, as wallets need them to add the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub rpc: Vec<String>,
    pub explorer: String,
}

impl ChainInfo {
    pub fn from_config(chain: &ChainConfig, upstream: &UpstreamConfig) -> Self {
        let rpc = std::iter::once(upstream.rpc_url.clone())
            .chain(chain.rpc_fallback.clone())
            .collect();

        Self {
            chain_id: chain.chain_id,
            name: chain.name.clone(),
            symbol: chain.symbol.clone(),
            decimals: chain.decimals,
            rpc,
            explorer: chain.explorer.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}
