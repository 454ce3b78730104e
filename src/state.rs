//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{MappingAllocator, MappingResolver};
use crate::domain::repositories::ExpiringStore;
use crate::utils::code_generator::IdGenerator;

/// How the public short URL is assembled from an identifier.
#[derive(Debug, Clone, Default)]
pub struct ShortUrlSettings {
    /// Fixed prefix such as `https://s.example.com`. When `None`, scheme and
    /// host come from the request.
    pub base_url: Option<String>,
    /// Trust `X-Forwarded-Proto` / `X-Forwarded-Host`.
    pub behind_proxy: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<MappingAllocator>,
    pub resolver: Arc<MappingResolver>,
    pub store: Arc<dyn ExpiringStore>,
    pub short_urls: Arc<ShortUrlSettings>,
}

impl AppState {
    /// Builds the state around one shared store client and generator.
    pub fn new(
        store: Arc<dyn ExpiringStore>,
        generator: Arc<dyn IdGenerator>,
        short_urls: ShortUrlSettings,
    ) -> Self {
        Self {
            allocator: Arc::new(MappingAllocator::new(store.clone(), generator)),
            resolver: Arc::new(MappingResolver::new(store.clone())),
            store,
            short_urls: Arc::new(short_urls),
        }
    }
}
