//! Key-value store abstraction with per-key expiration.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store read failed: {0}")]
    Read(String),

    #[error("Store write failed: {0}")]
    Write(String),

    #[error("Store delete failed: {0}")]
    Delete(String),

    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// An expiring key-value store holding string payloads.
///
/// Implementations must be safe for concurrent use: a single instance is
/// shared by every in-flight request.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - in-process store for tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpiringStore: Send + Sync {
    /// Reads the payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` if the key is present and not expired
    /// - `Ok(None)` if the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot answer.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// `ttl = None` stores the value without expiration.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Removes `key`. Returns `Ok(true)` if something was deleted.
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
