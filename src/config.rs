//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! There is no runtime reconfiguration.
//!
//! ## Store Configuration
//!
//! ### Method 1: Full URL
//!
//! ```bash
//! export REDIS_URL="redis://:secret@localhost:6379/0"
//! ```
//!
//! ### Method 2: Address and credential
//!
//! ```bash
//! export REDIS_ADDR="localhost:6379"
//! export REDIS_PW="secret"
//! export REDIS_DB="0"
//! ```
//!
//! If neither is set, an in-process store is used and mappings are lost on restart.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:80`)
//! - `BASE_URL` - Public prefix for short URLs (default: derived from each request)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-Proto` / `X-Forwarded-Host` (default: `false`)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins, trailing `*` matches a prefix
//!   (default: `http://localhost:5000*`)
//! - `STORE_TIMEOUT_MS` - Deadline for each store call (default: 2000)
//! - `STORE_KEY_PREFIX` - Namespace prepended to store keys (default: empty)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5000*";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL. `None` selects the in-memory store.
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Public prefix for short URLs, without trailing slash.
    pub base_url: Option<String>,
    /// When true, scheme and host are taken from `X-Forwarded-*` headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub cors_allowed_origins: Vec<String>,
    /// Deadline for a single store command, in milliseconds.
    pub store_timeout_ms: u64,
    pub store_key_prefix: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Never fails on absent variables; every setting has a default.
    /// Call [`Config::validate`] afterwards.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:80".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_else(|_| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        let store_timeout_ms = env::var("STORE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        let store_key_prefix = env::var("STORE_KEY_PREFIX").unwrap_or_default();

        Ok(Self {
            redis_url,
            listen_addr,
            log_level,
            log_format,
            base_url,
            behind_proxy,
            cors_allowed_origins,
            store_timeout_ms,
            store_key_prefix,
        })
    }

    /// Loads the Redis URL.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_ADDR`, `REDIS_PW`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let addr = env::var("REDIS_ADDR").ok().filter(|a| !a.is_empty())?;
        let password = env::var("REDIS_PW").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!(
                "redis://:{}@{}/{}",
                urlencoding::encode(&pwd),
                addr,
                db
            ),
            _ => format!("redis://{}/{}", addr, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the Redis URL has the wrong scheme
    /// - `BASE_URL` is not an http(s) URL
    /// - the store timeout is zero
    /// - no CORS origin is configured
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.store_timeout_ms == 0 {
            anyhow::bail!("STORE_TIMEOUT_MS must be greater than 0");
        }

        if self.cors_allowed_origins.is_empty() {
            anyhow::bail!("CORS_ALLOWED_ORIGINS must list at least one origin");
        }

        Ok(())
    }

    /// Returns whether the Redis store is configured.
    pub fn is_redis_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Store: {} (redis)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Store: in-memory");
        }

        tracing::info!("  Store timeout: {}ms", self.store_timeout_ms);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from request"),
        }
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Masks the password in connection strings for logging.
///
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
pub fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.rfind('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.find(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be already loaded (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
