//! Stored Entry Module
//!
//! A single clipboard blob held by the in-memory store, with its expiry deadline.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Stored Entry ==
/// Represents a single stored value with its expiry deadline.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now.
    ///
    /// A zero TTL yields an entry that is already expired.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);

        Self {
            value,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let before = current_timestamp_ms();
        let entry = StoredEntry::new(b"hello".to_vec(), Duration::from_secs(60));

        assert_eq!(entry.value, b"hello");
        assert!(entry.expires_at >= before + 60_000);
        assert!(entry.expires_at <= current_timestamp_ms() + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = StoredEntry::new(b"hello".to_vec(), Duration::from_secs(1));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let entry = StoredEntry::new(Vec::new(), Duration::ZERO);
        assert!(entry.is_expired());
    }
}
