//! Repository trait definitions for the domain layer.
//!
//! The store trait abstracts the expiring key-value backend. Implementations
//! live in `crate::infrastructure::store`; mocks are generated via `mockall`.

pub mod expiring_store;

pub use expiring_store::{ExpiringStore, StoreError, StoreResult};

#[cfg(test)]
pub use expiring_store::MockExpiringStore;
