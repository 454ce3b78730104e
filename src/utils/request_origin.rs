//! Public origin (`scheme://host`) of an incoming request.

use axum::http::{HeaderMap, Uri, header};

use crate::error::AppError;
use crate::state::ShortUrlSettings;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Returns the prefix short URLs are built on, without trailing slash.
///
/// Resolution order:
/// 1. The configured base URL
/// 2. `X-Forwarded-Proto` / `X-Forwarded-Host`, only when behind a proxy
/// 3. `http` plus the `Host` header (or the request URI authority for HTTP/2)
///
/// The service does not terminate TLS itself, so without a proxy header the
/// scheme is always `http`.
///
/// # Errors
///
/// Returns [`AppError::Unprocessable`] if no host can be determined.
pub fn public_origin(
    headers: &HeaderMap,
    uri: &Uri,
    settings: &ShortUrlSettings,
) -> Result<String, AppError> {
    if let Some(ref base_url) = settings.base_url {
        return Ok(base_url.trim_end_matches('/').to_string());
    }

    let forwarded = |name: &str| {
        settings
            .behind_proxy
            .then(|| first_header_value(headers, name))
            .flatten()
    };

    let scheme = forwarded(X_FORWARDED_PROTO).unwrap_or_else(|| "http".to_string());

    let host = forwarded(X_FORWARDED_HOST)
        .or_else(|| first_header_value(headers, header::HOST.as_str()))
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .ok_or_else(|| AppError::unprocessable("Missing Host header"))?;

    Ok(format!("{}://{}", scheme, host))
}

/// First comma-separated value of a header, trimmed. `None` if absent, empty
/// or not valid UTF-8.
fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    fn direct() -> ShortUrlSettings {
        ShortUrlSettings::default()
    }

    fn proxied() -> ShortUrlSettings {
        ShortUrlSettings {
            base_url: None,
            behind_proxy: true,
        }
    }

    #[test]
    fn test_host_header() {
        let result = public_origin(
            &headers(&[("host", "s.example.com")]),
            &Uri::from_static("/api"),
            &direct(),
        );
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_host_header_keeps_port() {
        let result = public_origin(
            &headers(&[("host", "localhost:8080")]),
            &Uri::from_static("/api"),
            &direct(),
        );
        assert_eq!(result.unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_uri_authority_fallback() {
        let result = public_origin(
            &HeaderMap::new(),
            &Uri::from_static("https://s.example.com/api"),
            &direct(),
        );
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_missing_host() {
        let result = public_origin(&HeaderMap::new(), &Uri::from_static("/api"), &direct());
        assert!(result.is_err());
    }

    #[test]
    fn test_forwarded_headers_ignored_without_proxy() {
        let result = public_origin(
            &headers(&[
                ("host", "internal:80"),
                ("x-forwarded-proto", "https"),
                ("x-forwarded-host", "s.example.com"),
            ]),
            &Uri::from_static("/api"),
            &direct(),
        );
        assert_eq!(result.unwrap(), "http://internal:80");
    }

    #[test]
    fn test_forwarded_headers_behind_proxy() {
        let result = public_origin(
            &headers(&[
                ("host", "internal:80"),
                ("x-forwarded-proto", "https, http"),
                ("x-forwarded-host", "s.example.com"),
            ]),
            &Uri::from_static("/api"),
            &proxied(),
        );
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_proxy_without_forwarded_headers() {
        let result = public_origin(
            &headers(&[("host", "s.example.com")]),
            &Uri::from_static("/api"),
            &proxied(),
        );
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_base_url_wins() {
        let settings = ShortUrlSettings {
            base_url: Some("https://sho.rt/".to_string()),
            behind_proxy: true,
        };
        let result = public_origin(
            &headers(&[("host", "internal"), ("x-forwarded-host", "other")]),
            &Uri::from_static("/api"),
            &settings,
        );
        assert_eq!(result.unwrap(), "https://sho.rt");
    }
}
