//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the host application must provide. None of them are
//! implemented for production in this crate: the consensus/indexing engine,
//! the naming rules and the storage drivers all live elsewhere.

use shared_crypto::{DataSigningKey, HashFunction};
use shared_types::{RecordHash, TxId};
use thiserror::Error;

/// Read access to the blockchain state engine.
pub trait StateEngine: Send + Sync {
    /// Whether `hash` is the presently-authoritative zonefile hash of some name.
    fn is_current_hash(&self, hash: &RecordHash) -> bool;

    /// Transaction that associated `hash` with `name`, at any point in history.
    fn resolve_txid(&self, name: &str, hash: &RecordHash) -> Option<TxId>;
}

/// Naming rules of the chain.
pub trait NameRules: Send + Sync {
    fn is_valid_name(&self, name: &str) -> bool;
}

/// Failure reported by a storage backend on read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No driver holds data under this hash.
    #[error("no data for {0}")]
    NotFound(RecordHash),

    /// Data was found but did not verify with the supplied hash function.
    #[error("data for {hash} failed {hash_fn} verification")]
    VerificationFailed {
        hash: RecordHash,
        hash_fn: &'static str,
    },

    /// Driver I/O failure.
    #[error("{0}")]
    Io(String),
}

/// Durable, pluggable zonefile storage.
pub trait StorageBackend: Send + Sync {
    /// Fetch the bytes stored under `hash`, verified with `hash_fn`.
    fn get_verified(
        &self,
        hash: &RecordHash,
        hash_fn: &dyn HashFunction,
    ) -> Result<Vec<u8>, BackendError>;

    /// Store `content` under `hash`, authorized by `txid`. Returns success.
    fn put(&self, txid: &TxId, hash: &RecordHash, content: &[u8]) -> bool;

    /// Delete the data under `hash`, authorized by `txid` and signed by
    /// `signing_key`. Returns success.
    fn delete(&self, hash: &RecordHash, txid: &TxId, signing_key: &DataSigningKey) -> bool;
}
