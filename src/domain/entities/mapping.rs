//! Mapping entity stored under each short identifier.

use serde::{Deserialize, Serialize};

/// A stored short link: destination plus the single-use flag.
///
/// Persisted as JSON `{"url": "...", "single": true}`. Entries are never
/// modified after they are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub url: String,
    /// Older payloads may omit the flag; those are not single-use.
    #[serde(default)]
    pub single: bool,
}

impl MappingEntry {
    pub fn new(url: impl Into<String>, single: bool) -> Self {
        Self {
            url: url.into(),
            single,
        }
    }

    /// Serializes the entry into the store payload.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a store payload.
    pub fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
