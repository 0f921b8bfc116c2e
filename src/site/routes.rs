use axum::{routing::get, Router};

use crate::{
    config::SiteConfig,
    site::{handler, model::ChainInfo},
};

pub fn site_routes(site: SiteConfig) -> Router {
    Router::new()
        .route("/robots.txt", get(handler::get_robots))
        .route("/sitemap.xml", get(handler::get_sitemap))
        .with_state(site)
}

pub fn chain_routes(chain: ChainInfo) -> Router {
    Router::new()
        .route("/chain", get(handler::get_chain_info))
        .with_state(chain)
}
