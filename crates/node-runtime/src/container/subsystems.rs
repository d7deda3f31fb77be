//! # Subsystem Container
//!
//! Holds the subsystem instances and wires them into a `ZonefileService`.
//!
//! ```text
//! zc-01 LocalCacheStore ─────────────┐
//! zc-03 StorageAuthorityBridge (opt) ├──→ ZonefileService
//! zc-02 PeerRetrievalCoordinator (opt)┘
//! ```
//!
//! The cache is always present. Durable storage and peer retrieval need
//! host-provided ports (state engine, backend, peer transport) and are
//! attached only when those are supplied.

use std::sync::Arc;

use tracing::info;
use zc_01_zonefile_cache::{CacheError, LocalCacheStore, ZonefileCacheApi};
use zc_02_peer_retrieval::{PeerConnector, PeerRetrievalApi, PeerRetrievalCoordinator, RetrievalMetrics};
use zc_03_storage_bridge::StorageAuthorityApi;

use crate::container::config::NodeConfig;
use crate::service::ZonefileService;

/// Central container holding the zonefile subsystems.
pub struct SubsystemContainer {
    /// Configuration the container was built from.
    pub config: NodeConfig,
    /// Local cache (zc-01).
    pub cache: Arc<LocalCacheStore>,
    /// Durable storage bridge (zc-03), if attached.
    pub storage: Option<Arc<dyn StorageAuthorityApi>>,
    /// Peer retrieval (zc-02), if a transport is attached.
    pub retrieval: Option<Arc<dyn PeerRetrievalApi>>,
    /// Retrieval counters shared with the coordinator.
    pub retrieval_metrics: Arc<RetrievalMetrics>,
}

impl SubsystemContainer {
    /// Create the container. Opens (and by default creates) the cache directory.
    pub fn new(config: NodeConfig) -> Result<Self, CacheError> {
        let cache = Arc::new(LocalCacheStore::new(config.cache.clone())?);

        Ok(Self {
            config,
            cache,
            storage: None,
            retrieval: None,
            retrieval_metrics: Arc::new(RetrievalMetrics::new()),
        })
    }

    /// Attach a storage-authority bridge.
    pub fn with_storage(mut self, storage: Arc<dyn StorageAuthorityApi>) -> Self {
        info!("[zc-03] Durable storage attached");
        self.storage = Some(storage);
        self
    }

    /// Attach a peer transport; lookups then consult the configured peers.
    pub fn with_peer_connector(mut self, connector: Arc<dyn PeerConnector>) -> Self {
        info!(
            "[zc-02] Peer retrieval attached ({} configured peers)",
            self.config.peers.endpoints.len()
        );
        let coordinator =
            PeerRetrievalCoordinator::with_metrics(connector, Arc::clone(&self.retrieval_metrics));
        self.retrieval = Some(Arc::new(coordinator));
        self
    }

    /// The wired lookup/publish service.
    pub fn zonefile_service(&self) -> ZonefileService {
        let cache: Arc<dyn ZonefileCacheApi> = self.cache.clone();
        let mut service = ZonefileService::new(cache);
        if let Some(storage) = &self.storage {
            service = service.with_storage(Arc::clone(storage));
        }
        if let Some(retrieval) = &self.retrieval {
            service = service.with_peers(Arc::clone(retrieval), self.config.peers.endpoints.clone());
        }
        service
    }
}
