//! Store Module
//!
//! The expiring key-value store the clipboard delegates all persistence to.
//!
//! Two backends implement [`ClipboardStore`]:
//! - [`RedisStore`] - external Redis-compatible server (production)
//! - [`MemoryStore`] - in-process map with TTL eviction (development and tests)

mod entry;
mod memory_store;
mod redis_store;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub use entry::StoredEntry;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

// == Public Constants ==
/// Namespace prefix for every clipboard key
pub const KEY_PREFIX: &str = "clipboard:";

/// Builds the store key for a clipboard identifier.
pub fn entry_key(id: &str) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

/// Expiring key-value store operations.
///
/// Implementations provide atomic single-key `get`/`set`; the clipboard does
/// no locking of its own.
#[async_trait]
pub trait ClipboardStore: Send + Sync {
    /// Returns the value for `key`, or `None` if it never existed or has expired.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any existing value and resetting its TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_is_namespaced() {
        assert_eq!(entry_key("0123456789abcdef"), "clipboard:0123456789abcdef");
    }
}
