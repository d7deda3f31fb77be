//! # Driving Ports (Inbound API)

use shared_types::{HashParseError, PeerEndpoint, Record, RecordHash};

/// Primary API for retrieving zonefiles from peers.
pub trait PeerRetrievalApi: Send + Sync {
    /// Return the first record, in `peers` order, whose content hashes to `hash`.
    ///
    /// Returns `None` when every peer errors, lacks the record, or returns
    /// content that does not verify. Later peers are never contacted once a
    /// verified record is found.
    fn fetch(&self, hash: &RecordHash, peers: &[PeerEndpoint]) -> Option<Record>;

    /// [`fetch`](Self::fetch) from the hash's text encoding.
    ///
    /// ## Errors
    ///
    /// - `HashParseError`: `hash_hex` is not a valid record hash. This is a
    ///   caller error, distinct from "no peer has it".
    fn fetch_hex(
        &self,
        hash_hex: &str,
        peers: &[PeerEndpoint],
    ) -> Result<Option<Record>, HashParseError> {
        let hash = RecordHash::from_hex(hash_hex)?;
        Ok(self.fetch(&hash, peers))
    }
}
