use reqwest::{Client, Url};

use crate::{config::UpstreamConfig, error::AppError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared outbound client. Every upstream call is bounded by the configured
/// timeout; a timeout surfaces as a transport error to the fallback chains.
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

/// Joins `segments` onto `base` as path segments. Each segment is
/// percent-encoded, so a configured id containing `/`, `?` or `#` stays
/// inside its own segment.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::ConfigError(format!("Invalid upstream URL {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("Upstream URL {} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
