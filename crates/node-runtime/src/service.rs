//! # Zonefile Service
//!
//! One lookup path over all sources, plus batch publish/retract.
//!
//! ## Lookup Order
//!
//! ```text
//! cache ──hit──→ return
//!   │ miss / corrupt (evicted)
//!   ↓
//! durable storage ──verified──→ write back to cache, return
//!   │ unknown hash / backend error / corrupt
//!   ↓
//! peers (configured order) ──verified──→ write back to cache, return
//!   │ exhausted
//!   ↓
//! None
//! ```
//!
//! Every source's answer is re-hashed here before it is trusted, even when
//! the source already verified it. Failures on the read path never surface
//! beyond `None`; write-back failures are logged and do not fail the lookup.

use std::sync::Arc;

use shared_crypto::{ContentVerifier, WalletKeys};
use shared_types::{HashParseError, PeerEndpoint, Record, RecordHash, TxId};
use tracing::{debug, info, warn};
use zc_01_zonefile_cache::{CacheError, ZonefileCacheApi};
use zc_02_peer_retrieval::PeerRetrievalApi;
use zc_03_storage_bridge::{BridgeError, StorageAuthorityApi};

/// Outcome of a batch of independent publish or retract operations.
///
/// One entry per input record, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Result<TxId, BridgeError>>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(Result::is_ok)
    }
}

/// Where a lookup found its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Cache,
    Storage,
    Peers,
}

/// Lookup and publication over the cache, durable storage and peers.
pub struct ZonefileService {
    cache: Arc<dyn ZonefileCacheApi>,
    storage: Option<Arc<dyn StorageAuthorityApi>>,
    retrieval: Option<Arc<dyn PeerRetrievalApi>>,
    peers: Vec<PeerEndpoint>,
    verifier: ContentVerifier,
}

impl ZonefileService {
    /// Cache-only service.
    pub fn new(cache: Arc<dyn ZonefileCacheApi>) -> Self {
        Self {
            cache,
            storage: None,
            retrieval: None,
            peers: Vec::new(),
            verifier: ContentVerifier::new(),
        }
    }

    /// Consult durable storage after the cache.
    pub fn with_storage(mut self, storage: Arc<dyn StorageAuthorityApi>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Consult `peers`, in order, after durable storage.
    pub fn with_peers(mut self, retrieval: Arc<dyn PeerRetrievalApi>, peers: Vec<PeerEndpoint>) -> Self {
        self.retrieval = Some(retrieval);
        self.peers = peers;
        self
    }

    pub fn peers(&self) -> &[PeerEndpoint] {
        &self.peers
    }

    /// Find a verified copy of the record for `hash`.
    pub fn lookup(&self, hash: &RecordHash) -> Option<Record> {
        self.lookup_with_source(hash).map(|(record, _)| record)
    }

    /// [`lookup`](Self::lookup) from the hash's text encoding.
    pub fn lookup_hex(&self, hash_hex: &str) -> Result<Option<Record>, HashParseError> {
        let hash = RecordHash::from_hex(hash_hex)?;
        Ok(self.lookup(&hash))
    }

    /// [`lookup`](Self::lookup), also reporting which source answered.
    pub fn lookup_with_source(&self, hash: &RecordHash) -> Option<(Record, LookupSource)> {
        match self.cache.get(hash) {
            Ok(record) => return Some((record, LookupSource::Cache)),
            Err(e) if e.is_miss() => debug!("[zc-01] {}", e),
            Err(e) => warn!("[zc-01] Cache read failed: {}", e),
        }

        if let Some(storage) = &self.storage {
            match storage.fetch_from_storage(hash) {
                Ok(record) => {
                    if self.accept(hash, &record, "storage") {
                        self.write_back(&record);
                        return Some((record, LookupSource::Storage));
                    }
                }
                Err(e) => debug!("[zc-03] Not from storage: {}", e),
            }
        }

        if let Some(retrieval) = &self.retrieval {
            if let Some(record) = retrieval.fetch(hash, &self.peers) {
                if self.accept(hash, &record, "peers") {
                    self.write_back(&record);
                    return Some((record, LookupSource::Peers));
                }
            }
        }

        debug!("No verified zonefile found for {}", hash);
        None
    }

    /// Cache a record locally without publishing it.
    pub fn store(&self, record: &Record) -> Result<RecordHash, CacheError> {
        self.cache.put(record)
    }

    /// Publish each record to durable storage, continuing past failures.
    pub fn publish_batch(&self, records: &[Record]) -> BatchReport {
        let outcomes = records
            .iter()
            .map(|record| match &self.storage {
                Some(storage) => storage.publish(record),
                None => Err(no_storage()),
            })
            .collect();
        let report = BatchReport { outcomes };
        info!(
            "[zc-03] Published {}/{} zonefiles",
            report.succeeded(),
            report.outcomes.len()
        );
        report
    }

    /// Retract each record from durable storage, continuing past failures.
    pub fn retract_batch(&self, records: &[Record], keys: &WalletKeys) -> BatchReport {
        let outcomes = records
            .iter()
            .map(|record| match &self.storage {
                Some(storage) => storage.retract(record, keys),
                None => Err(no_storage()),
            })
            .collect();
        let report = BatchReport { outcomes };
        info!(
            "[zc-03] Retracted {}/{} zonefiles",
            report.succeeded(),
            report.outcomes.len()
        );
        report
    }

    fn accept(&self, hash: &RecordHash, record: &Record, source: &str) -> bool {
        match self.verifier.hash(record) {
            Ok(actual) if actual == *hash => true,
            Ok(actual) => {
                warn!(
                    "Zonefile from {} hashes to {}, expected {}; discarding",
                    source, actual, hash
                );
                false
            }
            Err(e) => {
                warn!("Zonefile from {} could not be hashed: {}", source, e);
                false
            }
        }
    }

    fn write_back(&self, record: &Record) {
        if let Err(e) = self.cache.put(record) {
            warn!("[zc-01] Write-back to cache failed: {}", e);
        }
    }
}

fn no_storage() -> BridgeError {
    BridgeError::Storage("no durable storage attached".to_string())
}
