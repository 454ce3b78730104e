//! Cross-origin policy for the browser front-end.

use axum::http::{HeaderValue, Method, header, request::Parts};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// An allowed origin. A trailing `*` turns the entry into a prefix match,
/// so `http://localhost:5000*` also admits `http://localhost:50001`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPattern {
    Exact(String),
    Prefix(String),
}

impl OriginPattern {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix('*') {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(raw.to_string()),
        }
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(allowed) => origin == allowed,
            Self::Prefix(prefix) => origin.starts_with(prefix.as_str()),
        }
    }
}

/// Creates the CORS layer.
///
/// Allows `GET`, `POST` and `OPTIONS` with a `Content-Type` header from the
/// configured origins; preflight results are cacheable for an hour.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let patterns: Arc<[OriginPattern]> = allowed_origins
        .iter()
        .map(|origin| OriginPattern::parse(origin))
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| patterns.iter().any(|p| p.matches(origin)))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
