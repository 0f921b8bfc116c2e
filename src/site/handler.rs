use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::Utc;
use std::time::Duration;

use crate::{
    config::SiteConfig,
    site::{
        model::ChainInfo,
        service::{robots_txt, sitemap_entries, sitemap_xml},
    },
    utils::cache::edge_cache_control,
};

const CHAIN_INFO_REVALIDATE: Duration = Duration::from_secs(3600);

pub async fn get_robots(State(site): State<SiteConfig>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&site),
    )
}

pub async fn get_sitemap(State(site): State<SiteConfig>) -> impl IntoResponse {
    let entries = sitemap_entries(&site, Utc::now());

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&entries),
    )
}

pub async fn get_chain_info(State(chain): State<ChainInfo>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, edge_cache_control(CHAIN_INFO_REVALIDATE))],
        Json(chain),
    )
}
