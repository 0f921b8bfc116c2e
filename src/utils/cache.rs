use std::time::Duration;

use http::HeaderValue;

/// Revalidation hint attached to outbound requests so caching intermediaries
/// may reuse an answer for `window`.
pub fn revalidate_hint(window: Duration) -> HeaderValue {
    HeaderValue::from_str(&format!("max-age={}", window.as_secs()))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

/// `Cache-Control` for responses that an edge cache may serve for `window`
/// and keep serving while it revalidates in the background.
pub fn edge_cache_control(window: Duration) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "public, s-maxage={}, stale-while-revalidate",
        window.as_secs()
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}
