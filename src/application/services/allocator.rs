//! Short identifier allocation.

use std::sync::Arc;
use tracing::{debug, error, info};

use super::error::MappingError;
use crate::domain::DurationPolicy;
use crate::domain::entities::MappingEntry;
use crate::domain::repositories::ExpiringStore;
use crate::utils::code_generator::IdGenerator;

/// Reserves an unused short identifier and persists the mapping under it.
///
/// Candidates are drawn from the [`IdGenerator`] and probed against the store
/// until one is free. With 62^7 possible identifiers the loop has no attempt
/// cap; any store error ends it immediately.
///
/// The probe is not atomic with the write: two concurrent allocations that
/// draw the same candidate can both pass the check. The identifier space makes
/// this negligible and it is not guarded against.
pub struct MappingAllocator {
    store: Arc<dyn ExpiringStore>,
    generator: Arc<dyn IdGenerator>,
}

impl MappingAllocator {
    pub fn new(store: Arc<dyn ExpiringStore>, generator: Arc<dyn IdGenerator>) -> Self {
        Self { store, generator }
    }

    /// Creates a mapping for `destination` with the policy named by `duration`.
    ///
    /// The destination is stored as-is. Returns the bare identifier; building
    /// the full short URL is up to the caller.
    ///
    /// # Errors
    ///
    /// - [`MappingError::InvalidDuration`] if the token is unknown (no store access happens)
    /// - [`MappingError::StoreRead`] if an existence check fails
    /// - [`MappingError::StoreWrite`] if the final write fails
    pub async fn allocate(&self, destination: &str, duration: &str) -> Result<String, MappingError> {
        let policy: DurationPolicy = duration.parse()?;
        self.allocate_with_policy(destination, policy).await
    }

    /// Same as [`Self::allocate`] with an already parsed policy.
    pub async fn allocate_with_policy(
        &self,
        destination: &str,
        policy: DurationPolicy,
    ) -> Result<String, MappingError> {
        let payload = MappingEntry::new(destination, policy.single_use())
            .encode()
            .map_err(MappingError::EncodeFailed)?;

        let mut collisions: u64 = 0;

        loop {
            let id = self.generator.generate();

            let existing = self.store.get(&id).await.map_err(|e| {
                error!("Existence check failed for {}: {}", id, e);
                MappingError::StoreRead(e)
            })?;

            if existing.is_some() {
                collisions += 1;
                debug!("Identifier {} already taken, retrying", id);
                continue;
            }

            self.store
                .set(&id, &payload, policy.ttl())
                .await
                .map_err(|e| {
                    error!("Failed to save entry {}: {}", id, e);
                    MappingError::StoreWrite(e)
                })?;

            info!(
                id = %id,
                duration = %policy,
                collisions,
                "Mapping created"
            );

            return Ok(id);
        }
    }
}
