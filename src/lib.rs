//! # snip
//!
//! A minimal URL shortener backed by a managed key-value store.
//!
//! ## Architecture
//!
//! Two cooperating pieces form the short-link path:
//!
//! - **Resolver** ([`resolver`]) - request-interception middleware that maps
//!   inbound paths to stored long URLs and answers with a 308 redirect, or
//!   rewrites to the not-found view on a miss
//! - **Allocator** ([`api`]) - the `POST /api/shorten` endpoint that validates
//!   a long URL, mints a random code, and persists the mapping
//!
//! The key-value store ([`infrastructure::store`]) is the sole owner and
//! source of truth for mappings; the application keeps no in-process cache or
//! secondary index, so every request is handled independently.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod infrastructure;
pub mod resolver;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{KeyValueStore, RedisStore, StoreError};
    pub use crate::state::AppState;
}
