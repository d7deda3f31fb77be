//! # Subsystem Guarantees
//!
//! The behavioural guarantees of the cache (zc-01), peer retrieval (zc-02)
//! and storage bridge (zc-03), each checked through the public API only.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use shared_crypto::ContentVerifier;
    use shared_types::{PeerEndpoint, Record, RecordHash, TxId};

    use zc_01_zonefile_cache::test_utils::{sample_record, write_raw_blob};
    use zc_01_zonefile_cache::{CacheConfig, CacheError, LocalCacheStore, ZonefileCacheApi};
    use zc_02_peer_retrieval::test_utils::{sample_bytes, PeerScript, ScriptedConnector};
    use zc_02_peer_retrieval::{PeerRetrievalApi, PeerRetrievalCoordinator};
    use zc_03_storage_bridge::test_utils::CountingBackend;
    use zc_03_storage_bridge::{
        BlockstackNameRules, BridgeError, InMemoryStateEngine, InMemoryStorageBackend,
        StorageAuthorityApi, StorageAuthorityBridge,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn open_cache() -> (tempfile::TempDir, LocalCacheStore) {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCacheStore::new(CacheConfig::new(dir.path())).unwrap();
        (dir, cache)
    }

    fn peers(n: usize) -> Vec<PeerEndpoint> {
        (1..=n)
            .map(|i| PeerEndpoint::new(format!("p{}.example", i), 6264))
            .collect()
    }

    fn hash_of(record: &Record) -> RecordHash {
        ContentVerifier::new().hash(record).unwrap()
    }

    // =========================================================================
    // CACHE (zc-01)
    // =========================================================================

    #[test]
    fn test_round_trip_preserves_canonical_bytes() {
        let (_dir, cache) = open_cache();
        let records = [
            sample_record("alice.id"),
            Record::new().with_field("$origin", "bob.id"),
            Record::new()
                .with_field("$origin", "carol.id")
                .with_field("txt", json!([{"name": "key", "txt": "ünïcødé"}]))
                .with_field("nested", json!({"z": 1, "a": [3, 2, 1]})),
        ];

        for record in &records {
            let hash = cache.put(record).unwrap();
            let back = cache.get(&hash).unwrap();
            assert_eq!(back.canonical_bytes().unwrap(), record.canonical_bytes().unwrap());
        }
    }

    #[test]
    fn test_corrupt_entry_is_evicted_on_read() {
        let (dir, cache) = open_cache();
        let hash = hash_of(&sample_record("dave.id"));
        write_raw_blob(dir.path(), &hash, b"{\"$origin\":\"mallory.id\"}");

        assert!(matches!(cache.get(&hash), Err(CacheError::Corrupt { .. })));
        assert!(!cache.list().unwrap().contains(&hash.to_hex()));
        assert!(matches!(cache.get(&hash), Err(CacheError::NotFound { .. })));
    }

    #[test]
    fn test_idempotent_cache_write() {
        let (dir, cache) = open_cache();
        let record = sample_record("erin.id");

        let first = cache.put(&record).unwrap();
        let bytes_first = std::fs::read(dir.path().join(first.to_hex())).unwrap();
        let second = cache.put(&record).unwrap();
        let bytes_second = std::fs::read(dir.path().join(second.to_hex())).unwrap();

        assert_eq!(first, second);
        assert_eq!(bytes_first, bytes_second);
        assert_eq!(cache.list().unwrap(), vec![first.to_hex()]);
    }

    #[test]
    fn test_sweep_empties_cache_regardless_of_validity() {
        let (dir, cache) = open_cache();
        cache.put(&sample_record("frank.id")).unwrap();
        cache.put(&sample_record("gina.id")).unwrap();
        write_raw_blob(dir.path(), &RecordHash::from_bytes([7; 32]), b"junk");
        std::fs::write(dir.path().join("not-a-hash"), b"?").unwrap();

        let report = cache.sweep().unwrap();

        assert_eq!(report.removed, 4);
        assert!(report.is_clean());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    // =========================================================================
    // PEER RETRIEVAL (zc-02)
    // =========================================================================

    #[test]
    fn test_failover_skips_error_and_mismatch() {
        let (bytes, hash) = sample_bytes("helen.id");
        let p = peers(3);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&p[0], PeerScript::Error("internal error".into()))
                .script(&p[1], PeerScript::Serve(hash, b"{\"$origin\":\"evil.id\"}".to_vec()))
                .script(&p[2], PeerScript::Serve(hash, bytes.clone())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        let record = coordinator.fetch(&hash, &p).unwrap();

        assert_eq!(record.canonical_bytes().unwrap(), bytes);
        assert_eq!(connector.contacted(), p);
        let stats = coordinator.stats();
        assert_eq!(stats.peer_errors, 1);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_first_verified_peer_wins() {
        let (bytes, hash) = sample_bytes("helen.id");
        let p = peers(3);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&p[0], PeerScript::Serve(hash, bytes.clone()))
                .script(&p[1], PeerScript::Serve(hash, b"{}".to_vec()))
                .script(&p[2], PeerScript::Error("internal error".into())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        let record = coordinator.fetch(&hash, &p).unwrap();

        assert_eq!(record.canonical_bytes().unwrap(), bytes);
        assert_eq!(connector.contacted(), vec![p[0].clone()]);
    }

    #[test]
    fn test_peer_exhaustion_is_no_result() {
        let (_, hash) = sample_bytes("ivan.id");
        let p = peers(3);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&p[0], PeerScript::Error("busy".into()))
                .script(&p[1], PeerScript::Serve(hash, b"{\"$origin\":\"x.id\"}".to_vec())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        assert_eq!(coordinator.fetch(&hash, &p), None);
        assert_eq!(connector.contacted(), p);
        assert_eq!(coordinator.stats().exhausted, 1);
    }

    // =========================================================================
    // STORAGE BRIDGE (zc-03)
    // =========================================================================

    fn bridge(
        state: &Arc<InMemoryStateEngine>,
        backend: &Arc<CountingBackend<InMemoryStorageBackend>>,
    ) -> StorageAuthorityBridge {
        StorageAuthorityBridge::new(
            state.clone(),
            Arc::new(BlockstackNameRules),
            backend.clone(),
        )
    }

    #[test]
    fn test_authorization_gate_blocks_publish() {
        let state = Arc::new(InMemoryStateEngine::new());
        let backend = Arc::new(CountingBackend::new(InMemoryStorageBackend::new()));
        let record = sample_record("judy.id");
        // Anchored once, but since superseded.
        state.anchor("judy.id", hash_of(&record), TxId::new("old-tx"));

        let published = bridge(&state, &backend).publish(&record);

        assert!(published.is_err());
        assert!(published.unwrap_err().is_unauthorized());
        assert_eq!(backend.puts(), 0);
    }

    #[test]
    fn test_missing_transaction_blocks_publish() {
        let state = Arc::new(InMemoryStateEngine::new());
        let backend = Arc::new(CountingBackend::new(InMemoryStorageBackend::new()));
        let record = sample_record("ken.id");
        state.set_current(hash_of(&record), true);

        let published = bridge(&state, &backend).publish(&record);

        assert!(matches!(published, Err(BridgeError::MissingTransaction { .. })));
        assert_eq!(backend.puts(), 0);
        assert_eq!(backend.gets(), 0);
    }

    #[test]
    fn test_published_record_is_fetchable_until_superseded() {
        let state = Arc::new(InMemoryStateEngine::new());
        let backend = Arc::new(CountingBackend::new(InMemoryStorageBackend::new()));
        let bridge = bridge(&state, &backend);
        let record = sample_record("lena.id");
        let hash = hash_of(&record);
        state.register("lena.id", hash, TxId::new("tx-l"));

        assert_eq!(bridge.publish(&record), Ok(TxId::new("tx-l")));
        assert_eq!(bridge.fetch_from_storage(&hash), Ok(record));

        state.set_current(hash, false);
        assert_eq!(
            bridge.fetch_from_storage(&hash),
            Err(BridgeError::UnknownHash { hash })
        );
    }
}
