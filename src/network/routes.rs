use axum::{routing::get, Router};

use crate::network::{handler, service::NetworkService};

pub fn network_routes(service: NetworkService) -> Router {
    Router::new()
        .route("/network", get(handler::get_network_status))
        .with_state(service)
}
