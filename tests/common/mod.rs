#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::OriginalUri,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use marscredit_api::config::{AppEnv, ChainConfig, Config, SiteConfig, UpstreamConfig};

pub const TEST_TIMEOUT: Duration = Duration::from_millis(300);

/// How a stub upstream answers one call.
#[derive(Clone, Debug)]
pub enum Reply {
    /// 200 with this JSON body (for RPC stubs, wrapped as `result`).
    Ok(Value),
    RpcError,
    Status(StatusCode),
    Hang,
    Garbage,
}

impl Reply {
    async fn rpc(self) -> Response {
        match self {
            Reply::Ok(result) => Json(json!({ "jsonrpc": "2.0", "id": 1, "result": result })).into_response(),
            other => other.plain().await,
        }
    }

    async fn plain(self) -> Response {
        match self {
            Reply::Ok(body) => Json(body).into_response(),
            Reply::RpcError => Json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": { "code": -32601, "message": "method not supported" }
            }))
            .into_response(),
            Reply::Status(status) => (status, "upstream unavailable").into_response(),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                (StatusCode::GATEWAY_TIMEOUT, "too late").into_response()
            }
            Reply::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        }
    }
}

/// Every request a stub saw: path with query, and its `Cache-Control` header.
pub type HitLog = Arc<Mutex<Vec<(String, Option<String>)>>>;

fn record(log: &HitLog, uri: &OriginalUri, headers: &HeaderMap) {
    let cache_control = headers
        .get("cache-control")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    log.lock().unwrap().push((uri.0.to_string(), cache_control));
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// JSON-RPC node answering `eth_blockNumber` and `net_peerCount` as scripted.
pub fn rpc_stub(block: Reply, peers: Reply, log: HitLog) -> Router {
    let handler = move |uri: OriginalUri, headers: HeaderMap, Json(body): Json<Value>| {
        record(&log, &uri, &headers);
        let reply = match body["method"].as_str() {
            Some("eth_blockNumber") => block.clone(),
            Some("net_peerCount") => peers.clone(),
            _ => Reply::RpcError,
        };
        async move { reply.rpc().await }
    };

    Router::new().route("/", post(handler))
}

/// GeckoTerminal under `/gt`, CoinGecko under `/cg`.
pub fn price_stub(gecko_terminal: Reply, coingecko: Reply, log: HitLog) -> Router {
    let gt_log = log.clone();
    let gt = move |uri: OriginalUri, headers: HeaderMap| {
        record(&gt_log, &uri, &headers);
        let reply = gecko_terminal.clone();
        async move { reply.plain().await }
    };

    let cg = move |uri: OriginalUri, headers: HeaderMap| {
        record(&log, &uri, &headers);
        let reply = coingecko.clone();
        async move { reply.plain().await }
    };

    Router::new()
        .route("/gt/pools/:pool", get(gt))
        .route("/cg/onchain/networks/:chain/tokens/:address", get(cg))
}

pub fn gecko_terminal_body(price: &str) -> Value {
    json!({ "data": { "attributes": { "base_token_price_usd": price } } })
}

pub fn coingecko_body(price: &str) -> Value {
    json!({ "data": { "attributes": { "price_usd": price } } })
}

pub fn test_config(rpc_base: &str, price_base: &str) -> Config {
    Config {
        port: 0,
        host: "127.0.0.1".into(),
        app_env: AppEnv::Test,
        upstream: UpstreamConfig {
            rpc_url: format!("{}/", rpc_base),
            gecko_terminal_api: format!("{}/gt", price_base),
            coingecko_api: format!("{}/cg", price_base),
            coingecko_api_key: None,
            pool_address: "pool-1".into(),
            token_address: "0xtoken".into(),
            chain_id: 1,
            timeout: TEST_TIMEOUT,
        },
        site: SiteConfig::default(),
        chain: ChainConfig::default(),
    }
}

/// Sends a GET through the full router and returns status, headers and body.
pub async fn get_route(app: Router, path: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, body.to_vec())
}

pub async fn get_route_json(app: Router, path: &str) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, body) = get_route(app, path).await;
    (status, headers, serde_json::from_slice(&body).unwrap())
}
