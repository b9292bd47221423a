//! Store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for the managed key-value store holding short link mappings.
///
/// Implementations must be thread-safe; a single instance is constructed at
/// process start and shared by reference across all requests.
///
/// Unlike a cache, errors are propagated to callers: the resolver degrades a
/// failed read to a not-found rewrite, the allocator surfaces a failed write
/// as a request error. Neither path retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the long URL stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` when the key exists
    /// - `Ok(None)` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unreachable or the operation
    /// fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    ///
    /// The write is unconditional: there is no check that the key is absent,
    /// so a colliding key silently replaces the previous mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unreachable or the operation
    /// fails.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
