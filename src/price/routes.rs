use axum::{routing::get, Router};

use crate::price::{handler, service::PriceService};

pub fn price_routes(service: PriceService) -> Router {
    Router::new()
        .route("/price", get(handler::get_price))
        .with_state(service)
}
