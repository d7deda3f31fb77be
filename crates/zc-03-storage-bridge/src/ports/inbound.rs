//! # Inbound Ports (Driving Ports)

use shared_crypto::WalletKeys;
use shared_types::{AuthorizationRecord, Record, RecordHash, TxId};

use crate::domain::errors::BridgeError;

/// Primary API of the Storage-Authority Bridge.
///
/// Mutations return the authorizing `TxId` on success. The boolean outcome
/// callers used to get is `.is_ok()`; every failure is also logged.
pub trait StorageAuthorityApi: Send + Sync {
    /// Fetch a current zonefile from durable storage.
    ///
    /// ## Errors
    ///
    /// - `UnknownHash`: hash is not presently authoritative
    /// - `Storage`: backend retrieval failed
    /// - `CorruptRemote`: content did not re-verify against `hash`
    fn fetch_from_storage(&self, hash: &RecordHash) -> Result<Record, BridgeError>;

    /// Find the transaction that anchored `record`'s hash to its `$origin`.
    ///
    /// `Ok(None)` means the record was never anchored; that is expected, not
    /// an error.
    ///
    /// ## Errors
    ///
    /// - `MissingOrigin`: no `$origin` field
    /// - `InvalidName`: `$origin` rejected by the naming rules
    fn resolve_txid(&self, record: &Record) -> Result<Option<AuthorizationRecord>, BridgeError>;

    /// Upload `record` to durable storage, keyed by its authorizing transaction.
    ///
    /// The backend is never contacted unless both gates pass.
    fn publish(&self, record: &Record) -> Result<TxId, BridgeError>;

    /// Delete `record` from durable storage, signing with the data key derived
    /// from `keys`.
    fn retract(&self, record: &Record, keys: &WalletKeys) -> Result<TxId, BridgeError>;
}
