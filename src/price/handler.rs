use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::time::Duration;

use crate::{price::service::PriceService, utils::cache::edge_cache_control};

pub const PRICE_ROUTE_REVALIDATE: Duration = Duration::from_secs(30);

// Always 200, including the zero-price sentinel
pub async fn get_price(State(service): State<PriceService>) -> impl IntoResponse {
    let price = service.get_price().await;

    (
        [(header::CACHE_CONTROL, edge_cache_control(PRICE_ROUTE_REVALIDATE))],
        Json(price),
    )
}
