use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use shared_crypto::{verify_with_public_key, DataSigningKey, HashFunction};
use shared_types::{RecordHash, TxId};

use crate::ports::outbound::{BackendError, StateEngine, StorageBackend};

/// In-memory state engine.
///
/// Holds the set of current hashes and the `(name, hash) -> txid` anchors
/// an indexer would otherwise derive from the chain.
#[derive(Default)]
pub struct InMemoryStateEngine {
    current: RwLock<HashSet<RecordHash>>,
    anchors: RwLock<HashMap<(String, RecordHash), TxId>>,
}

impl InMemoryStateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `txid` anchored `hash` to `name`.
    pub fn anchor(&self, name: &str, hash: RecordHash, txid: TxId) {
        self.anchors.write().insert((name.to_string(), hash), txid);
    }

    /// Mark `hash` as (not) presently authoritative.
    pub fn set_current(&self, hash: RecordHash, current: bool) {
        let mut set = self.current.write();
        if current {
            set.insert(hash);
        } else {
            set.remove(&hash);
        }
    }

    /// Anchor and mark current in one step: the usual "name updated" event.
    pub fn register(&self, name: &str, hash: RecordHash, txid: TxId) {
        self.anchor(name, hash, txid);
        self.set_current(hash, true);
    }
}

impl StateEngine for InMemoryStateEngine {
    fn is_current_hash(&self, hash: &RecordHash) -> bool {
        self.current.read().contains(hash)
    }

    fn resolve_txid(&self, name: &str, hash: &RecordHash) -> Option<TxId> {
        self.anchors.read().get(&(name.to_string(), *hash)).cloned()
    }
}

struct StoredEntry {
    txid: Option<TxId>,
    content: Vec<u8>,
}

/// In-memory storage backend.
///
/// Verifies on read with the caller's hash function, like the real drivers.
/// A delete is accepted only if its signature verifies under one of the
/// authorized data public keys.
#[derive(Default)]
pub struct InMemoryStorageBackend {
    entries: RwLock<HashMap<RecordHash, StoredEntry>>,
    deletions: RwLock<Vec<(RecordHash, TxId, String)>>,
    authorized_keys: RwLock<HashSet<String>>,
}

impl InMemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept deletes signed by this compressed SEC1 public key (hex).
    pub fn authorize_key(&self, public_key_hex: impl Into<String>) {
        self.authorized_keys.write().insert(public_key_hex.into());
    }

    /// Builder form of [`authorize_key`](Self::authorize_key).
    pub fn with_authorized_key(self, public_key_hex: impl Into<String>) -> Self {
        self.authorize_key(public_key_hex);
        self
    }

    /// Store bytes without authorization, e.g. to simulate a tampered driver.
    pub fn insert_raw(&self, hash: RecordHash, content: Vec<u8>) {
        self.entries
            .write()
            .insert(hash, StoredEntry { txid: None, content });
    }

    pub fn contains(&self, hash: &RecordHash) -> bool {
        self.entries.read().contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Transaction the entry under `hash` was stored with.
    pub fn txid_for(&self, hash: &RecordHash) -> Option<TxId> {
        self.entries.read().get(hash).and_then(|e| e.txid.clone())
    }

    /// Public key that signed the delete of `hash`, if it was deleted.
    pub fn deleted_by(&self, hash: &RecordHash) -> Option<String> {
        self.deletions
            .read()
            .iter()
            .find(|(h, _, _)| h == hash)
            .map(|(_, _, signer)| signer.clone())
    }
}

fn delete_message(hash: &RecordHash, txid: &TxId) -> Vec<u8> {
    format!("delete:{}:{}", hash, txid).into_bytes()
}

impl StorageBackend for InMemoryStorageBackend {
    fn get_verified(
        &self,
        hash: &RecordHash,
        hash_fn: &dyn HashFunction,
    ) -> Result<Vec<u8>, BackendError> {
        let entries = self.entries.read();
        let entry = entries.get(hash).ok_or(BackendError::NotFound(*hash))?;
        if !hash_fn.matches(&entry.content, hash) {
            return Err(BackendError::VerificationFailed {
                hash: *hash,
                hash_fn: hash_fn.name(),
            });
        }
        Ok(entry.content.clone())
    }

    fn put(&self, txid: &TxId, hash: &RecordHash, content: &[u8]) -> bool {
        self.entries.write().insert(
            *hash,
            StoredEntry {
                txid: Some(txid.clone()),
                content: content.to_vec(),
            },
        );
        true
    }

    fn delete(&self, hash: &RecordHash, txid: &TxId, signing_key: &DataSigningKey) -> bool {
        let message = delete_message(hash, txid);
        let signature = signing_key.sign(&message);
        let authorized = self
            .authorized_keys
            .read()
            .iter()
            .any(|key| verify_with_public_key(key, &message, &signature).is_ok());
        if !authorized {
            tracing::warn!("[zc-03] Delete of {} signed by unauthorized key", hash);
            return false;
        }

        if self.entries.write().remove(hash).is_none() {
            return false;
        }
        self.deletions
            .write()
            .push((*hash, txid.clone(), signing_key.public_key_hex()));
        true
    }
}
