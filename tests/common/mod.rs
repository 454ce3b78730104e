#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use short_redirect::domain::entities::MappingEntry;
use short_redirect::domain::repositories::{ExpiringStore, StoreError, StoreResult};
use short_redirect::infrastructure::store::MemoryStore;
use short_redirect::routes::app_router;
use short_redirect::state::{AppState, ShortUrlSettings};
use short_redirect::utils::code_generator::{IdGenerator, RandomIdGenerator};
use std::sync::Arc;
use std::time::Duration;

pub const TEST_ORIGIN: &str = "http://localhost:5000";

pub fn cors_origins() -> Vec<String> {
    vec![format!("{}*", TEST_ORIGIN)]
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    create_test_state_with(Arc::new(RandomIdGenerator), ShortUrlSettings::default())
}

pub fn create_test_state_with(
    generator: Arc<dyn IdGenerator>,
    settings: ShortUrlSettings,
) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), generator, settings);
    (state, store)
}

const READONLY: &str = "READONLY You can't write against a read only replica";

/// Store whose reads miss and whose writes, deletes and PINGs fail.
pub struct FailingStore;

#[async_trait]
impl ExpiringStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> StoreResult<()> {
        Err(StoreError::Write(READONLY.to_string()))
    }

    async fn delete(&self, _key: &str) -> StoreResult<bool> {
        Err(StoreError::Delete(READONLY.to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn failing_test_server() -> TestServer {
    let state = AppState::new(
        Arc::new(FailingStore),
        Arc::new(RandomIdGenerator),
        ShortUrlSettings::default(),
    );
    test_server(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, &cors_origins())).unwrap()
}

pub async fn store_mapping(store: &MemoryStore, id: &str, url: &str, single: bool) {
    let payload = MappingEntry::new(url, single).encode().unwrap();
    store.set(id, &payload, None).await.unwrap();
}

pub async fn store_expiring_mapping(store: &MemoryStore, id: &str, url: &str, ttl: Duration) {
    let payload = MappingEntry::new(url, false).encode().unwrap();
    store.set(id, &payload, Some(ttl)).await.unwrap();
}

/// Identifier part of a `short_url`.
pub fn id_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
