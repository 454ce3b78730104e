//! Expiring key-value store backends.
//!
//! Provides two [`ExpiringStore`](crate::domain::repositories::ExpiringStore) implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for tests and local runs without Redis

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
