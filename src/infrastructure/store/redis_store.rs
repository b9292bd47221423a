//! Redis-backed store implementation.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis implementation of the key-value store.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Keys are the raw short codes; values are the long URLs.
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to the store and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to key-value store");

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Connection(format!("Failed to create client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("PING failed: {e}")))?;

        info!("✓ Connected to key-value store");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| StoreError::Operation(format!("GET {key}: {e}")))?;

        match &value {
            Some(url) => debug!("Store HIT: {} -> {}", key, url),
            None => debug!("Store MISS: {}", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| StoreError::Operation(format!("SET {key}: {e}")))?;

        debug!("Store SET: {} -> {}", key, value);

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
