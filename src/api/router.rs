use axum::{
    http::{Method, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppError,
    network::{routes::network_routes, service::NetworkService},
    price::{routes::price_routes, service::PriceService},
    site::{
        model::ChainInfo,
        routes::{chain_routes, site_routes},
    },
    upstream::build_http_client,
};

pub fn create_router(config: &Config) -> Result<Router, AppError> {
    // Setup CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    // Setup services
    let http = build_http_client(&config.upstream)?;
    let network_service = NetworkService::new(http.clone(), &config.upstream);
    let price_service = PriceService::from_config(http, &config.upstream)?;
    let chain_info = ChainInfo::from_config(&config.chain, &config.upstream);

    // Setup routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .merge(network_routes(network_service))
        .merge(price_routes(price_service))
        .merge(chain_routes(chain_info));

    // Build the router
    let app = Router::new()
        .nest("/api", api_routes)
        .merge(site_routes(config.site.clone()))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Server is running"
        })),
    )
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFoundError(uri.path().to_string())
}
