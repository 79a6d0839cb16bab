//! Configuration Module
//!
//! Loads the clipboard server configuration from environment variables once at startup.

use std::env;
use std::str::FromStr;

use crate::error::{ClipboardError, Result};

/// Maximum accepted clipboard payload in bytes (10 MiB)
pub const DEFAULT_MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Lifetime of a clipboard entry in seconds (24 hours)
pub const DEFAULT_TTL_SECONDS: u64 = 86_400;

/// Which expiring key-value store backs the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// External Redis-compatible server
    Redis,
    /// In-process map, for development and tests
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ClipboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ClipboardError::Config(format!(
                "unknown STORE_BACKEND '{}', expected 'redis' or 'memory'",
                other
            ))),
        }
    }
}

/// Server configuration parameters.
///
/// Every value can be overridden with an environment variable; unset
/// variables fall back to the reference defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Store implementation to use
    pub store_backend: StoreBackend,
    /// Store host name or address
    pub store_host: String,
    /// Store port
    pub store_port: u16,
    /// Optional store username (ACL user)
    pub store_username: Option<String>,
    /// Optional store password
    pub store_password: Option<String>,
    /// Maximum accepted payload in bytes
    pub max_content_size: usize,
    /// Entry lifetime in seconds
    pub ttl_seconds: u64,
    /// Memory backend sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `STORE_HOST` - Store host (default: 127.0.0.1)
    /// - `STORE_PORT` - Store port (default: 6379)
    /// - `STORE_USERNAME` / `STORE_PASSWORD` - Store credentials (default: none)
    /// - `MAX_CONTENT_SIZE` - Payload ceiling in bytes (default: 10485760)
    /// - `CLIPBOARD_TTL` - Entry TTL in seconds (default: 86400)
    /// - `CLEANUP_INTERVAL` - Memory backend sweep interval in seconds (default: 60)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Present but unparseable values are errors rather than silently defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.store_backend,
        };

        Ok(Self {
            server_port: parse_var(&lookup, "SERVER_PORT")?.unwrap_or(defaults.server_port),
            store_backend,
            store_host: lookup("STORE_HOST").unwrap_or(defaults.store_host),
            store_port: parse_var(&lookup, "STORE_PORT")?.unwrap_or(defaults.store_port),
            store_username: lookup("STORE_USERNAME").filter(|v| !v.is_empty()),
            store_password: lookup("STORE_PASSWORD").filter(|v| !v.is_empty()),
            max_content_size: parse_var(&lookup, "MAX_CONTENT_SIZE")?
                .unwrap_or(defaults.max_content_size),
            ttl_seconds: parse_var(&lookup, "CLIPBOARD_TTL")?.unwrap_or(defaults.ttl_seconds),
            cleanup_interval: parse_var(&lookup, "CLEANUP_INTERVAL")?
                .unwrap_or(defaults.cleanup_interval),
        })
    }

    /// Checks the configuration before any store connection is made.
    pub fn validate(&self) -> Result<()> {
        if self.store_backend == StoreBackend::Redis {
            if self.store_host.trim().is_empty() {
                return Err(ClipboardError::Config("STORE_HOST cannot be empty".to_string()));
            }
            if self.store_port == 0 {
                return Err(ClipboardError::Config("STORE_PORT cannot be 0".to_string()));
            }
        }
        if self.max_content_size == 0 {
            return Err(ClipboardError::Config(
                "MAX_CONTENT_SIZE must be greater than 0".to_string(),
            ));
        }
        // The store rejects SET with EX 0
        if self.ttl_seconds == 0 {
            return Err(ClipboardError::Config(
                "CLIPBOARD_TTL must be greater than 0".to_string(),
            ));
        }
        if self.cleanup_interval == 0 {
            return Err(ClipboardError::Config(
                "CLEANUP_INTERVAL must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            store_backend: StoreBackend::Redis,
            store_host: "127.0.0.1".to_string(),
            store_port: 6379,
            store_username: None,
            store_password: None,
            max_content_size: DEFAULT_MAX_CONTENT_SIZE,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            cleanup_interval: 60,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ClipboardError::Config(format!("invalid value for {}: '{}'", name, raw))),
        None => Ok(None),
    }
}
