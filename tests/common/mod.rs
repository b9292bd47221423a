#![allow(dead_code)]

use async_trait::async_trait;
use snip::infrastructure::store::{KeyValueStore, StoreError, StoreResult};
use snip::state::AppState;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_BASE_URL: &str = "https://s.test";

/// In-memory stand-in for the managed key-value store.
///
/// Counts lookups so tests can assert which paths never touch the store.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
    lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(code: &str, url: &str) -> Self {
        let store = Self::default();
        store.insert(code, url);
        store
    }

    pub fn insert(&self, code: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), url.to_string());
    }

    pub fn value_of(&self, code: &str) -> Option<String> {
        self.entries.lock().unwrap().get(code).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.insert(key, value);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Store whose operations always fail, for outage behavior tests.
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Operation(format!("GET {key}: connection refused")))
    }

    async fn set(&self, key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Operation(format!("SET {key}: connection refused")))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(store: std::sync::Arc<dyn KeyValueStore>) -> AppState {
    AppState::new(store, TEST_BASE_URL)
}
