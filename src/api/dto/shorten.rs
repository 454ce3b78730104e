//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /api`.
///
/// Both fields are optional at the serde level so that a missing field can be
/// reported with its own message instead of a generic parse error.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
