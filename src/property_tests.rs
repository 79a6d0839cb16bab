//! Property-Based Tests for the clipboard service
//!
//! Uses proptest over the service backed by the in-memory store.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::{generate_id, ClipboardService, ID_LENGTH};
use crate::error::ClipboardError;
use crate::store::MemoryStore;

// == Test Configuration ==
const TEST_MAX_CONTENT: usize = 4096;
const TEST_TTL: Duration = Duration::from_secs(300);

fn test_service(ttl: Duration) -> (Arc<MemoryStore>, ClipboardService) {
    let store = Arc::new(MemoryStore::new());
    let service = ClipboardService::new(store.clone(), TEST_MAX_CONTENT, ttl);
    (store, service)
}

// == Strategies ==
/// Arbitrary bytes within the content limit, including invalid UTF-8
fn content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=TEST_MAX_CONTENT)
}

/// Byte lengths just beyond the content limit
fn oversized_len_strategy() -> impl Strategy<Value = usize> {
    (TEST_MAX_CONTENT + 1)..(TEST_MAX_CONTENT * 2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any content within the limit reads back byte-for-byte
    #[test]
    fn prop_roundtrip_content(content in content_strategy()) {
        let (_, service) = test_service(TEST_TTL);

        let retrieved = tokio_test::block_on(async {
            let created = service.create(&content).await.unwrap();
            service.retrieve(&created.id).await.unwrap()
        });

        prop_assert_eq!(retrieved, content, "Round-trip content mismatch");
    }

    // Oversized payloads are rejected and leave the store untouched
    #[test]
    fn prop_oversized_rejected_without_write(len in oversized_len_strategy()) {
        let (store, service) = test_service(TEST_TTL);
        let content = vec![0u8; len];

        let (result, empty) = tokio_test::block_on(async {
            let result = service.create(&content).await;
            (result, store.is_empty().await)
        });

        let is_too_large = matches!(result, Err(ClipboardError::PayloadTooLarge { .. }));
        prop_assert!(is_too_large, "Expected PayloadTooLarge");
        prop_assert!(empty, "Rejected create must not write to the store");
    }

    // Ids are always 16 lowercase hex characters
    #[test]
    fn prop_id_shape(content in content_strategy(), ts in any::<i64>()) {
        let id = generate_id(&content, ts);
        prop_assert_eq!(id.len(), ID_LENGTH);
        prop_assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    // Identifiers never issued by create are not found
    #[test]
    fn prop_unknown_id_not_found(id in "[0-9a-f]{16}") {
        let (_, service) = test_service(TEST_TTL);

        let result = tokio_test::block_on(service.retrieve(&id));
        prop_assert!(matches!(result, Err(ClipboardError::NotFound(_))));
    }

    // Entries stored with a zero TTL are immediately gone
    #[test]
    fn prop_expired_entry_not_found(content in content_strategy()) {
        let (_, service) = test_service(Duration::ZERO);

        let result = tokio_test::block_on(async {
            let created = service.create(&content).await.unwrap();
            service.retrieve(&created.id).await
        });

        prop_assert!(matches!(result, Err(ClipboardError::NotFound(_))));
    }

    // Distinct contents under one timestamp yield distinct ids
    #[test]
    fn prop_distinct_content_distinct_ids(
        contents in prop::collection::hash_set(prop::collection::vec(any::<u8>(), 0..64), 1..50),
        ts in any::<i64>()
    ) {
        let ids: HashSet<String> = contents.iter().map(|c| generate_id(c, ts)).collect();
        prop_assert_eq!(ids.len(), contents.len(), "Id collision between distinct contents");
    }
}
