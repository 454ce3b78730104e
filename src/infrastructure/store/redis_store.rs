//! Redis-backed expiring store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::repositories::{ExpiringStore, StoreError, StoreResult};

/// Redis store for short link mappings.
///
/// Uses a `ConnectionManager`, which multiplexes one connection and reconnects
/// on failure; clones are cheap and safe to use from concurrent requests.
/// Every command runs under the configured deadline.
pub struct RedisStore {
    client: ConnectionManager,
    timeout: Duration,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://:secret@localhost:6379/0"`)
    /// - `timeout` - deadline applied to the connect and to every later command
    /// - `key_prefix` - namespace prepended to every key (empty for bare identifiers)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(
        redis_url: &str,
        timeout: Duration,
        key_prefix: impl Into<String>,
    ) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(timeout))?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            timeout,
            key_prefix: key_prefix.into(),
        };

        let mut conn = store.client.clone();
        store
            .run(conn.ping::<()>(), StoreError::Unavailable)
            .await?;

        info!("Connected to Redis");

        Ok(store)
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    /// Awaits a Redis command under the deadline, classifying failures.
    async fn run<T>(
        &self,
        command: impl Future<Output = RedisResult<T>>,
        kind: fn(String) -> StoreError,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) if e.is_io_error() || e.is_connection_dropped() => {
                Err(StoreError::Unavailable(e.to_string()))
            }
            Ok(Err(e)) => Err(kind(e.to_string())),
            Err(_) => Err(StoreError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl ExpiringStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        let value = self
            .run(conn.get::<_, Option<String>>(&key), StoreError::Read)
            .await?;

        debug!(
            "Redis GET {}: {}",
            key,
            if value.is_some() { "hit" } else { "miss" }
        );
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        match ttl.filter(|ttl| !ttl.is_zero()) {
            None => {
                self.run(conn.set::<_, _, ()>(&key, value), StoreError::Write)
                    .await?
            }
            Some(ttl) if ttl.subsec_nanos() == 0 => {
                self.run(
                    conn.set_ex::<_, _, ()>(&key, value, ttl.as_secs()),
                    StoreError::Write,
                )
                .await?
            }
            Some(ttl) => {
                let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
                self.run(
                    conn.pset_ex::<_, _, ()>(&key, value, millis),
                    StoreError::Write,
                )
                .await?
            }
        }

        debug!("Redis SET {} (TTL: {:?})", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let key = self.build_key(key);
        let mut conn = self.client.clone();

        let deleted = self
            .run(conn.del::<_, usize>(&key), StoreError::Delete)
            .await?;

        debug!("Redis DEL {}: {}", key, deleted);
        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.run(conn.ping::<()>(), StoreError::Unavailable)
            .await
            .is_ok()
    }
}
