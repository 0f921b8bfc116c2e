pub mod client;
pub mod json_rpc;

pub use client::{build_http_client, endpoint};
pub use json_rpc::{parse_hex_quantity, JsonRpcClient};
