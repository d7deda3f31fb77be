//! # Node Flows
//!
//! Drives a fully wired `SubsystemContainer` the way the node does:
//!
//! ```text
//! NodeConfig ──→ SubsystemContainer ──→ ZonefileService
//!                  ├─ zc-01 cache (tempdir)
//!                  ├─ zc-03 bridge (in-memory state engine + backend)
//!                  └─ zc-02 coordinator (scripted peers from config)
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use node_runtime::{LookupSource, NodeConfig, SubsystemContainer};
    use shared_crypto::{ContentVerifier, WalletKeys};
    use shared_types::{PeerEndpoint, Record, RecordHash, TxId};
    use zc_01_zonefile_cache::test_utils::{sample_record, write_raw_blob};
    use zc_01_zonefile_cache::ZonefileCacheApi;
    use zc_02_peer_retrieval::test_utils::{PeerScript, ScriptedConnector};
    use zc_03_storage_bridge::test_utils::{authorized_backend, DATA_KEY_HEX, OWNER_KEY_HEX};
    use zc_03_storage_bridge::{
        BlockstackNameRules, BridgeError, InMemoryStateEngine, InMemoryStorageBackend,
        StorageAuthorityBridge,
    };

    struct Node {
        _dir: tempfile::TempDir,
        container: SubsystemContainer,
        state: Arc<InMemoryStateEngine>,
        backend: Arc<InMemoryStorageBackend>,
    }

    fn node(peer_list: &str, connector: ScriptedConnector) -> (Node, Arc<ScriptedConnector>) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = NodeConfig::default();
        let dir_str = dir.path().to_string_lossy().to_string();
        config
            .apply_overrides(|key| match key {
                "ZC_ZONEFILE_DIR" => Some(dir_str.clone()),
                "ZC_PEERS" => Some(peer_list.to_string()),
                _ => None,
            })
            .unwrap();

        let state = Arc::new(InMemoryStateEngine::new());
        let backend = Arc::new(authorized_backend());
        let bridge = StorageAuthorityBridge::new(
            state.clone(),
            Arc::new(BlockstackNameRules),
            backend.clone(),
        );
        let connector = Arc::new(connector);
        let container = SubsystemContainer::new(config)
            .unwrap()
            .with_storage(Arc::new(bridge))
            .with_peer_connector(connector.clone());

        (
            Node {
                _dir: dir,
                container,
                state,
                backend,
            },
            connector,
        )
    }

    fn hash_of(record: &Record) -> RecordHash {
        ContentVerifier::new().hash(record).unwrap()
    }

    #[test]
    fn test_lookup_walks_cache_storage_then_configured_peers() {
        let from_storage = sample_record("alice.id");
        let from_peer = sample_record("bob.id");
        let peer_hash = hash_of(&from_peer);
        let connector = ScriptedConnector::new().script(
            &PeerEndpoint::new("seed2.example", 6264),
            PeerScript::Serve(peer_hash, from_peer.canonical_bytes().unwrap()),
        );
        let (node, connector) = node("seed1.example:6264,seed2.example:6264", connector);
        let service = node.container.zonefile_service();

        let storage_hash = hash_of(&from_storage);
        node.state.register("alice.id", storage_hash, TxId::new("tx-a"));
        assert!(service.publish_batch(&[from_storage.clone()]).all_succeeded());

        let (found, source) = service.lookup_with_source(&storage_hash).unwrap();
        assert_eq!((found, source), (from_storage, LookupSource::Storage));
        // Storage answered; no peer was needed.
        assert!(connector.contacted().is_empty());

        let (found, source) = service.lookup_with_source(&peer_hash).unwrap();
        assert_eq!((found, source), (from_peer, LookupSource::Peers));
        assert_eq!(
            connector.contacted(),
            vec![
                PeerEndpoint::new("seed1.example", 6264),
                PeerEndpoint::new("seed2.example", 6264),
            ]
        );

        // Both are now served from the cache.
        assert!(node.container.cache.contains(&storage_hash));
        assert!(node.container.cache.contains(&peer_hash));
        let stats = node.container.retrieval_metrics.snapshot();
        assert_eq!(stats.connect_failures, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_corrupt_cache_entry_is_replaced_from_storage() {
        let (node, _) = node("seed1.example:6264", ScriptedConnector::new());
        let record = sample_record("carol.id");
        let hash = hash_of(&record);
        node.state.register("carol.id", hash, TxId::new("tx-c"));
        let service = node.container.zonefile_service();
        assert!(service.publish_batch(std::slice::from_ref(&record)).all_succeeded());
        write_raw_blob(node.container.cache.config().zonefile_dir(), &hash, b"bit rot");

        assert_eq!(service.lookup(&hash), Some(record.clone()));
        assert_eq!(node.container.cache.get(&hash).unwrap(), record);
    }

    #[test]
    fn test_batch_publish_and_retract() {
        let (node, _) = node("seed1.example:6264", ScriptedConnector::new());
        let service = node.container.zonefile_service();
        let dave = sample_record("dave.id");
        let erin = sample_record("erin.id");
        let nameless = Record::new().with_field("$ttl", 60);
        node.state.register("dave.id", hash_of(&dave), TxId::new("tx-d"));
        node.state.register("erin.id", hash_of(&erin), TxId::new("tx-e"));
        node.state.set_current(hash_of(&nameless), true);

        let published = service.publish_batch(&[dave.clone(), nameless.clone(), erin.clone()]);
        assert_eq!(published.succeeded(), 2);
        assert_eq!(published.outcomes[1], Err(BridgeError::MissingOrigin));
        assert_eq!(node.backend.len(), 2);

        let retracted = service.retract_batch(&[dave], &WalletKeys::with_data_key(DATA_KEY_HEX));
        assert!(retracted.all_succeeded());
        let retracted = service.retract_batch(&[erin], &WalletKeys::with_owner_key(OWNER_KEY_HEX));
        assert!(retracted.all_succeeded());
        assert!(node.backend.is_empty());
    }

    #[test]
    fn test_sweep_then_lookup_refills_from_storage() {
        let (node, _) = node("seed1.example:6264", ScriptedConnector::new());
        let service = node.container.zonefile_service();
        let record = sample_record("frank.id");
        let hash = hash_of(&record);
        node.state.register("frank.id", hash, TxId::new("tx-f"));
        service.store(&record).unwrap();
        service.publish_batch(std::slice::from_ref(&record));

        let report = node.container.cache.sweep().unwrap();
        assert_eq!(report.removed, 1);
        assert!(node.container.cache.list().unwrap().is_empty());

        assert_eq!(service.lookup(&hash), Some(record));
        assert_eq!(node.container.cache.list().unwrap(), vec![hash.to_hex()]);
    }
}
