//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::infrastructure::store::KeyValueStore;

/// State shared across all requests.
///
/// The store client is constructed once at startup and reused for every
/// request; there is no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub base_url: String,
}

impl AppState {
    /// Creates application state, normalizing the base URL.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// Builds the fully-qualified short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
