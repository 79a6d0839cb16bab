//! Clipboard Service
//!
//! Create and retrieve operations layered over a [`ClipboardStore`].

use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ClipboardError, Result};
use crate::store::{entry_key, ClipboardStore};

/// Hex characters kept from the content digest
pub const ID_LENGTH: usize = 16;

/// How an inbound payload was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent<'a> {
    /// Valid UTF-8
    Text(&'a str),
    /// Anything else, stored as-is
    Binary(&'a [u8]),
}

impl<'a> ClipboardContent<'a> {
    /// Classifies `bytes`, falling back to binary when they are not UTF-8.
    pub fn classify(bytes: &'a [u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => ClipboardContent::Text(text),
            Err(_) => ClipboardContent::Binary(bytes),
        }
    }

    /// Raw bytes to persist.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            ClipboardContent::Text(text) => text.as_bytes(),
            ClipboardContent::Binary(bytes) => bytes,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ClipboardContent::Text(_) => "text",
            ClipboardContent::Binary(_) => "binary",
        }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntry {
    /// Identifier to retrieve the content with
    pub id: String,
    /// Lifetime granted to the entry
    pub ttl_seconds: u64,
}

/// Derives an entry identifier from content and a Unix timestamp in seconds.
///
/// `hex(sha256(content || timestamp))`, truncated to [`ID_LENGTH`] characters.
pub fn generate_id(content: &[u8], unix_secs: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.update(unix_secs.to_string().as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LENGTH);
    id
}

/// Renders a TTL for humans, e.g. "24 hours" or "90 minutes".
pub fn format_ttl(seconds: u64) -> String {
    fn plural(n: u64, unit: &str) -> String {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    }

    if seconds >= 3600 && seconds % 3600 == 0 {
        plural(seconds / 3600, "hour")
    } else if seconds >= 60 && seconds % 60 == 0 {
        plural(seconds / 60, "minute")
    } else {
        plural(seconds, "second")
    }
}

// == Clipboard Service ==
/// Size-checked, hashed writes and plain reads against the shared store.
#[derive(Clone)]
pub struct ClipboardService {
    store: Arc<dyn ClipboardStore>,
    max_content_size: usize,
    ttl: Duration,
}

impl ClipboardService {
    /// Creates a service with explicit limits.
    pub fn new(store: Arc<dyn ClipboardStore>, max_content_size: usize, ttl: Duration) -> Self {
        Self {
            store,
            max_content_size,
            ttl,
        }
    }

    /// Creates a service using the limits from configuration.
    pub fn from_config(store: Arc<dyn ClipboardStore>, config: &Config) -> Self {
        Self::new(
            store,
            config.max_content_size,
            Duration::from_secs(config.ttl_seconds),
        )
    }

    /// Maximum accepted payload in bytes.
    pub fn max_content_size(&self) -> usize {
        self.max_content_size
    }

    /// Lifetime granted to new entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ClipboardStore> {
        &self.store
    }

    // == Create ==
    /// Stores `content` under a fresh identifier with the full TTL.
    ///
    /// Oversized payloads are rejected before the store is touched.
    pub async fn create(&self, content: &[u8]) -> Result<CreatedEntry> {
        if content.len() > self.max_content_size {
            return Err(ClipboardError::PayloadTooLarge {
                limit: self.max_content_size,
            });
        }

        let content = ClipboardContent::classify(content);
        let bytes = content.as_bytes();
        let id = generate_id(bytes, chrono::Utc::now().timestamp());

        self.store.set(&entry_key(&id), bytes, self.ttl).await?;

        info!(
            id = %id,
            size = bytes.len(),
            kind = content.kind(),
            "Clipboard entry created"
        );

        Ok(CreatedEntry {
            id,
            ttl_seconds: self.ttl.as_secs(),
        })
    }

    // == Retrieve ==
    /// Returns the stored content, or `NotFound` if absent or expired.
    pub async fn retrieve(&self, id: &str) -> Result<Vec<u8>> {
        match self.store.get(&entry_key(id)).await? {
            Some(content) => {
                debug!(id = %id, size = content.len(), "Clipboard entry read");
                Ok(content)
            }
            None => Err(ClipboardError::NotFound(id.to_string())),
        }
    }
}
