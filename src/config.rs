//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full URL (simpler for local development)
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! ### Method 2: Individual components (recommended for production)
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! If `REDIS_URL` is not set, it will be automatically constructed from
//! `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, and `REDIS_DB`.
//!
//! ## Required Variables
//!
//! Either `REDIS_URL` or `REDIS_HOST`
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Public base URL used when building short links
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the managed key-value store.
    pub redis_url: String,
    /// Public base URL, prepended to generated codes in responses.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the store connection configuration is missing or
    /// if `BASE_URL` is not a valid absolute URL.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url().context("Failed to load store configuration")?;

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Url::parse(&base_url).context("BASE_URL must be a valid absolute URL")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            redis_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads the store URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    fn load_redis_url() -> Result<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Ok(url);
        }

        let host =
            env::var("REDIS_HOST").context("REDIS_HOST must be set when REDIS_URL is not provided")?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").unwrap_or_default();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        if password.is_empty() {
            Ok(format!("redis://{host}:{port}/{db}"))
        } else {
            Ok(format!("redis://:{password}@{host}:{port}/{db}"))
        }
    }
}
