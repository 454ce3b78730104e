//! Short identifier resolution with single-use enforcement.

use std::sync::Arc;
use tracing::{debug, error, warn};

use super::error::MappingError;
use crate::domain::entities::MappingEntry;
use crate::domain::repositories::ExpiringStore;

/// Looks up short identifiers and consumes single-use mappings.
pub struct MappingResolver {
    store: Arc<dyn ExpiringStore>,
}

impl MappingResolver {
    pub fn new(store: Arc<dyn ExpiringStore>) -> Self {
        Self { store }
    }

    /// Returns the destination stored under `id`.
    ///
    /// Single-use entries are deleted after the lookup. The delete is
    /// best-effort: a failure is logged and the destination is still returned.
    /// Two concurrent resolutions of the same single-use identifier may both
    /// succeed before either delete lands.
    ///
    /// # Errors
    ///
    /// - [`MappingError::NotFound`] if nothing is stored (or it expired)
    /// - [`MappingError::DecodeFailed`] if the stored payload is corrupt
    /// - [`MappingError::StoreRead`] if the lookup itself fails
    pub async fn resolve(&self, id: &str) -> Result<String, MappingError> {
        let entry = self.inspect(id).await?;

        if entry.single {
            match self.store.delete(id).await {
                Ok(true) => debug!("Consumed single-use mapping {}", id),
                Ok(false) => debug!("Single-use mapping {} already removed", id),
                Err(e) => warn!("Failed to delete single-use mapping {}: {}", id, e),
            }
        }

        Ok(entry.url)
    }

    /// Reads the entry stored under `id` without consuming it.
    pub async fn inspect(&self, id: &str) -> Result<MappingEntry, MappingError> {
        let payload = self
            .store
            .get(id)
            .await
            .map_err(|e| {
                error!("Failed to read mapping {}: {}", id, e);
                MappingError::StoreRead(e)
            })?
            .ok_or(MappingError::NotFound)?;

        MappingEntry::decode(&payload).map_err(|e| {
            error!("Failed to decode mapping {}: {}", id, e);
            MappingError::DecodeFailed(e)
        })
    }
}
