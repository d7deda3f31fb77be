//! Instrumented peer session.

use std::sync::Arc;
use std::time::Instant;

use shared_types::{PeerEndpoint, RecordHash};

use crate::domain::errors::PeerError;
use crate::domain::metrics::RetrievalMetrics;
use crate::ports::outbound::{PeerSession, RecordBatch};

/// Wraps a `PeerSession`, counting requests and failures and tracing latency.
pub struct MonitoredSession {
    inner: Box<dyn PeerSession>,
    peer: PeerEndpoint,
    metrics: Arc<RetrievalMetrics>,
}

impl MonitoredSession {
    pub fn new(inner: Box<dyn PeerSession>, peer: PeerEndpoint, metrics: Arc<RetrievalMetrics>) -> Self {
        Self {
            inner,
            peer,
            metrics,
        }
    }

    pub fn peer(&self) -> &PeerEndpoint {
        &self.peer
    }
}

impl PeerSession for MonitoredSession {
    fn get_records(&self, hashes: &[RecordHash]) -> Result<RecordBatch, PeerError> {
        self.metrics.record_request();
        let started = Instant::now();

        let result = self.inner.get_records(hashes);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(batch) => tracing::trace!(
                peer = %self.peer,
                requested = hashes.len(),
                returned = batch.len(),
                elapsed_ms,
                "[zc-02] get_records"
            ),
            Err(e) => {
                self.metrics.record_peer_error();
                tracing::trace!(peer = %self.peer, elapsed_ms, error = %e, "[zc-02] get_records failed");
            }
        }
        result
    }
}
