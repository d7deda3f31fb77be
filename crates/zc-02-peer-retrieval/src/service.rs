//! # Peer Retrieval Coordinator
//!
//! Sequential, verified failover across peers. See the crate docs for the
//! per-peer protocol.

use std::sync::Arc;

use shared_crypto::ContentVerifier;
use shared_types::{PeerEndpoint, Record, RecordHash};

use crate::adapters::MonitoredSession;
use crate::domain::metrics::{RetrievalMetrics, RetrievalStats};
use crate::ports::inbound::PeerRetrievalApi;
use crate::ports::outbound::{PeerConnector, PeerSession};

/// Retrieves zonefiles from peers, trusting only content that verifies.
///
/// # Example
///
/// ```rust,ignore
/// let coordinator = PeerRetrievalCoordinator::new(Arc::new(JsonRpcConnector::default()));
/// let peers = vec![PeerEndpoint::new("node1.example.org", 6264)];
/// if let Some(record) = coordinator.fetch(&hash, &peers) {
///     cache.put(&record)?;
/// }
/// ```
pub struct PeerRetrievalCoordinator {
    connector: Arc<dyn PeerConnector>,
    verifier: ContentVerifier,
    metrics: Arc<RetrievalMetrics>,
}

impl PeerRetrievalCoordinator {
    pub fn new(connector: Arc<dyn PeerConnector>) -> Self {
        Self::with_metrics(connector, Arc::new(RetrievalMetrics::new()))
    }

    /// Create a coordinator reporting into shared metrics.
    pub fn with_metrics(connector: Arc<dyn PeerConnector>, metrics: Arc<RetrievalMetrics>) -> Self {
        Self {
            connector,
            verifier: ContentVerifier::new(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<RetrievalMetrics> {
        &self.metrics
    }

    pub fn stats(&self) -> RetrievalStats {
        self.metrics.snapshot()
    }

    /// Ask one peer. `None` means "advance to the next peer".
    fn try_peer(&self, hash: &RecordHash, peer: &PeerEndpoint) -> Option<Record> {
        let session = match self.connector.connect(peer) {
            Ok(session) => MonitoredSession::new(session, peer.clone(), self.metrics.clone()),
            Err(e) => {
                self.metrics.record_connect_failure();
                tracing::warn!("[zc-02] Peer {}: connect failed: {}", peer, e);
                return None;
            }
        };

        let mut batch = match session.get_records(std::slice::from_ref(hash)) {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!("[zc-02] Peer {}: {}", peer, e);
                return None;
            }
        };

        let Some(bytes) = batch.remove(hash) else {
            self.metrics.record_miss();
            tracing::error!("[zc-02] Peer {} did not return {}", peer, hash);
            return None;
        };

        if !self.verifier.verify(&bytes, hash) {
            self.metrics.record_mismatch();
            tracing::error!(
                "[zc-02] Zonefile hash mismatch from {}: expected {}, got {}",
                peer,
                hash,
                self.verifier.hash_bytes(&bytes)
            );
            return None;
        }

        match Record::from_json_bytes(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                self.metrics.record_mismatch();
                tracing::error!("[zc-02] Peer {} returned undecodable zonefile {}: {}", peer, hash, e);
                None
            }
        }
    }
}

impl PeerRetrievalApi for PeerRetrievalCoordinator {
    fn fetch(&self, hash: &RecordHash, peers: &[PeerEndpoint]) -> Option<Record> {
        for peer in peers {
            if let Some(record) = self.try_peer(hash, peer) {
                self.metrics.record_hit();
                tracing::info!("[zc-02] ✅ Fetched zonefile {} from {}", hash, peer);
                return Some(record);
            }
        }

        self.metrics.record_exhausted();
        tracing::debug!(
            "[zc-02] No peer of {} returned a valid zonefile {}",
            peers.len(),
            hash
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_bytes, PeerScript, ScriptedConnector};
    use shared_types::HashParseError;

    fn peers(n: u16) -> Vec<PeerEndpoint> {
        (1..=n).map(|i| PeerEndpoint::new(format!("p{}", i), 6264)).collect()
    }

    #[test]
    fn test_failover_error_then_mismatch_then_hit() {
        let (bytes, hash) = sample_bytes("alice.id");
        let (other, _) = sample_bytes("mallory.id");
        let peers = peers(4);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&peers[0], PeerScript::Error("no such zonefile".into()))
                .script(&peers[1], PeerScript::Serve(hash, other))
                .script(&peers[2], PeerScript::Serve(hash, bytes.clone()))
                .script(&peers[3], PeerScript::Serve(hash, bytes.clone())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        let record = coordinator.fetch(&hash, &peers).unwrap();

        assert_eq!(record.canonical_bytes().unwrap(), bytes);
        assert_eq!(connector.contacted(), peers[..3].to_vec());
        let stats = coordinator.stats();
        assert_eq!(stats.requests, 3);
        assert_eq!(stats.peer_errors, 1);
        assert_eq!(stats.mismatches, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_first_peer_hit_skips_the_rest() {
        let (bytes, hash) = sample_bytes("bob.id");
        let peers = peers(3);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&peers[0], PeerScript::Serve(hash, bytes.clone()))
                .script(&peers[1], PeerScript::Error("unused".into()))
                .script(&peers[2], PeerScript::Error("unused".into())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        assert!(coordinator.fetch(&hash, &peers).is_some());
        assert_eq!(connector.contacted(), vec![peers[0].clone()]);
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let (_, hash) = sample_bytes("carol.id");
        let (other, other_hash) = sample_bytes("dave.id");
        let peers = peers(4);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&peers[0], PeerScript::Error("boom".into()))
                .script(&peers[1], PeerScript::Serve(hash, other.clone()))
                .script(&peers[2], PeerScript::Serve(other_hash, other))
                .script(&peers[3], PeerScript::Unreachable),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        assert!(coordinator.fetch(&hash, &peers).is_none());
        assert_eq!(connector.contacted().len(), 4);
        let stats = coordinator.stats();
        assert_eq!(stats.connect_failures, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.exhausted, 1);
    }

    #[test]
    fn test_each_peer_asked_once() {
        let (_, hash) = sample_bytes("erin.id");
        let peers = peers(2);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&peers[0], PeerScript::Error("busy".into()))
                .script(&peers[1], PeerScript::Error("busy".into())),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector.clone());

        assert!(coordinator.fetch(&hash, &peers).is_none());
        assert_eq!(connector.contacted(), peers);
    }

    #[test]
    fn test_empty_peer_list() {
        let (_, hash) = sample_bytes("frank.id");
        let coordinator = PeerRetrievalCoordinator::new(Arc::new(ScriptedConnector::new()));
        assert!(coordinator.fetch(&hash, &[]).is_none());
    }

    #[test]
    fn test_verified_non_object_is_skipped() {
        let (bytes, hash) = sample_bytes("gina.id");
        let junk = b"\"just a string\"".to_vec();
        let junk_hash = ContentVerifier::new().hash_bytes(&junk);
        let peers = peers(2);
        let connector = Arc::new(
            ScriptedConnector::new()
                .script(&peers[0], PeerScript::Serve(junk_hash, junk))
                .script(&peers[1], PeerScript::Serve(hash, bytes)),
        );
        let coordinator = PeerRetrievalCoordinator::new(connector);

        assert!(coordinator.fetch(&junk_hash, &peers).is_none());
    }

    #[test]
    fn test_fetch_hex_rejects_bad_hash() {
        let coordinator = PeerRetrievalCoordinator::new(Arc::new(ScriptedConnector::new()));
        assert!(matches!(
            coordinator.fetch_hex("xyz", &peers(1)),
            Err(HashParseError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_fetch_hex_absent_is_ok_none() {
        let (_, hash) = sample_bytes("hank.id");
        let coordinator = PeerRetrievalCoordinator::new(Arc::new(ScriptedConnector::new()));
        assert_eq!(coordinator.fetch_hex(&hash.to_hex(), &peers(1)), Ok(None));
    }
}
