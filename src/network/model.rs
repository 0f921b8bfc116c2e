use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::serialize_iso_millis;

/// Shown when the chain head cannot be read at all.
pub const FALLBACK_BLOCK: u64 = 2_500_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub block: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<u64>,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl NetworkStatus {
    pub fn new(block: u64, peers: Option<u64>) -> Self {
        Self {
            block,
            peers,
            updated_at: Utc::now(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_BLOCK, None)
    }
}
