use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::time::Duration;

use crate::{network::service::NetworkService, utils::cache::edge_cache_control};

pub const NETWORK_ROUTE_REVALIDATE: Duration = Duration::from_secs(5);

// Always 200: upstream failures only degrade the body
pub async fn get_network_status(State(service): State<NetworkService>) -> impl IntoResponse {
    let status = service.get_network_status().await;

    (
        [(header::CACHE_CONTROL, edge_cache_control(NETWORK_ROUTE_REVALIDATE))],
        Json(status),
    )
}
