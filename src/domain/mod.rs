//! Domain layer containing the mapping model and store contract.
//!
//! # Architecture
//!
//! - [`entities`] - The stored mapping record
//! - [`repositories`] - Expiring key-value store trait
//! - [`duration_policy`] - Closed set of expiry policies
//!
//! The domain layer has no dependencies on infrastructure or HTTP. Services
//! built on top of it live in [`crate::application::services`].

pub mod duration_policy;
pub mod entities;
pub mod repositories;

pub use duration_policy::{DurationPolicy, UnrecognizedPolicy};
