//! # Short Redirect
//!
//! A small URL shortening service built with Axum and Redis.
//!
//! A client posts a long URL and a duration policy (`single`, `day` or
//! `hour`) and receives a short URL with a random 7-character identifier.
//! Visiting the short URL answers with a `307` redirect; `single` links are
//! deleted after their first use, the others expire through the store's TTL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, duration policies and the store trait
//! - **Application Layer** ([`application`]) - Identifier allocation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_ADDR="localhost:6379"
//! export REDIS_PW="secret"   # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MappingAllocator, MappingError, MappingResolver};
    pub use crate::domain::entities::MappingEntry;
    pub use crate::domain::repositories::{ExpiringStore, StoreError};
    pub use crate::domain::DurationPolicy;
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::{AppState, ShortUrlSettings};
    pub use crate::utils::code_generator::{IdGenerator, RandomIdGenerator, SeededIdGenerator};
}
