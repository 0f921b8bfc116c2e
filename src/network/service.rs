use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::UpstreamConfig,
    error::FetchError,
    network::model::NetworkStatus,
    upstream::JsonRpcClient,
};

/// Revalidation window advertised for each RPC call.
pub const RPC_REVALIDATE: Duration = Duration::from_secs(5);

const BLOCK_NUMBER_METHOD: &str = "eth_blockNumber";
const PEER_COUNT_METHOD: &str = "net_peerCount";

#[derive(Clone, Debug)]
pub struct NetworkService {
    rpc: JsonRpcClient,
}

impl NetworkService {
    pub fn new(http: Client, config: &UpstreamConfig) -> Self {
        Self {
            rpc: JsonRpcClient::new(http, config.rpc_url.clone(), RPC_REVALIDATE),
        }
    }

    /// Current chain status. Never fails: if the chain head cannot be read the
    /// placeholder status is returned instead.
    pub async fn get_network_status(&self) -> NetworkStatus {
        match self.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!("Chain head unavailable, serving placeholder block: {}", e);
                NetworkStatus::fallback()
            }
        }
    }

    async fn fetch_status(&self) -> Result<NetworkStatus, FetchError> {
        let block = self.rpc.call_quantity(BLOCK_NUMBER_METHOD).await?;
        let peers = self.peer_count().await;

        Ok(NetworkStatus::new(block, peers))
    }

    // Not every node exposes net_peerCount, so any failure just drops the field.
    async fn peer_count(&self) -> Option<u64> {
        match self.rpc.call_quantity(PEER_COUNT_METHOD).await {
            Ok(peers) => Some(peers),
            Err(e) => {
                debug!("Peer count unavailable: {}", e);
                None
            }
        }
    }
}
