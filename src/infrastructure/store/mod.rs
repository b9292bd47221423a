//! Key-value store access for short link mappings.
//!
//! Provides a [`KeyValueStore`] trait with a production [`RedisStore`]
//! implementation. The store is the sole owner and source of truth for
//! `code -> long URL` mappings; the application holds no cache on top of it.

mod redis_store;
mod service;

pub use redis_store::RedisStore;
pub use service::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use service::MockKeyValueStore;
