//! Error kinds surfaced by the mapping services.

use crate::domain::UnrecognizedPolicy;
use crate::domain::repositories::StoreError;

/// Failure of a create or resolve operation.
///
/// Carries the kind only; mapping to HTTP status codes happens in
/// [`crate::error::AppError`].
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error(transparent)]
    InvalidDuration(#[from] UnrecognizedPolicy),

    #[error("Failed to read entry: {0}")]
    StoreRead(#[source] StoreError),

    #[error("Failed to save entry: {0}")]
    StoreWrite(#[source] StoreError),

    #[error("Failed to encode entry: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    #[error("Short link not found")]
    NotFound,

    #[error("Failed to decode entry: {0}")]
    DecodeFailed(#[source] serde_json::Error),
}
