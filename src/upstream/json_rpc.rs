use std::time::Duration;

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{error::FetchError, utils::cache::revalidate_hint};

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC 2.0 client: one POST per call, no batching, no retries.
#[derive(Clone, Debug)]
pub struct JsonRpcClient {
    http: Client,
    url: String,
    revalidate: Duration,
}

impl JsonRpcClient {
    pub fn new(http: Client, url: impl Into<String>, revalidate: Duration) -> Self {
        Self {
            http,
            url: url.into(),
            revalidate,
        }
    }

    /// Calls a parameterless method and returns its `result`.
    pub async fn call<T: DeserializeOwned>(&self, method: &str) -> Result<T, FetchError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: &[],
        };

        let resp = self
            .http
            .post(&self.url)
            .header(header::CACHE_CONTROL, revalidate_hint(self.revalidate))
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp.json::<JsonRpcResponse<T>>().await?;

        if let Some(err) = body.error {
            return Err(FetchError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        body.result
            .ok_or_else(|| FetchError::Malformed(format!("{} returned no result", method)))
    }

    /// Calls a method whose result is a hex-encoded quantity such as `"0x2625a00"`.
    pub async fn call_quantity(&self, method: &str) -> Result<u64, FetchError> {
        let raw: String = self.call(method).await?;
        parse_hex_quantity(&raw)
    }
}

/// Decodes a base-16 quantity. The `0x` prefix is optional; anything that is
/// not a hex digit after it is rejected.
pub fn parse_hex_quantity(raw: &str) -> Result<u64, FetchError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FetchError::Malformed(format!("invalid hex quantity {:?}", raw)));
    }

    u64::from_str_radix(digits, 16)
        .map_err(|e| FetchError::Malformed(format!("invalid hex quantity {:?}: {}", raw, e)))
}
