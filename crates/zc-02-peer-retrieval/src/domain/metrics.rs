//! # Retrieval Metrics
//!
//! Lock-free counters describing how peer lookups resolve. Shared between
//! the coordinator and every `MonitoredSession` it opens.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live retrieval counters.
#[derive(Debug, Default)]
pub struct RetrievalMetrics {
    connect_failures: AtomicU64,
    requests: AtomicU64,
    peer_errors: AtomicU64,
    misses: AtomicU64,
    mismatches: AtomicU64,
    hits: AtomicU64,
    exhausted: AtomicU64,
}

/// Point-in-time copy of `RetrievalMetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetrievalStats {
    /// Peers that could not be connected to.
    pub connect_failures: u64,
    /// `get_records` calls issued.
    pub requests: u64,
    /// Calls that returned an error.
    pub peer_errors: u64,
    /// Successful calls without an entry for the requested hash.
    pub misses: u64,
    /// Entries whose content did not hash to the requested hash.
    pub mismatches: u64,
    /// Verified records returned.
    pub hits: u64,
    /// Lookups that ran out of peers.
    pub exhausted: u64,
}

impl RetrievalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_connect_failure(&self) {
        self.connect_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_peer_error(&self) {
        self.peer_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_mismatch(&self) {
        self.mismatches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RetrievalStats {
        RetrievalStats {
            connect_failures: self.connect_failures.load(Ordering::Relaxed),
            requests: self.requests.load(Ordering::Relaxed),
            peer_errors: self.peer_errors.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            mismatches: self.mismatches.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            exhausted: self.exhausted.load(Ordering::Relaxed),
        }
    }
}
