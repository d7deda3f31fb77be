//! Backend wrappers and fixtures for bridge tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use shared_crypto::{DataSigningKey, HashFunction};
use shared_types::{Record, RecordHash, TxId};

use crate::adapters::InMemoryStorageBackend;
use crate::ports::outbound::{BackendError, StorageBackend};

/// secp256k1 secret used as a wallet data key in tests.
pub const DATA_KEY_HEX: &str = "1111111111111111111111111111111111111111111111111111111111111111";

/// secp256k1 secret used as a wallet owner key in tests.
pub const OWNER_KEY_HEX: &str = "2222222222222222222222222222222222222222222222222222222222222222";

/// In-memory backend accepting deletes signed with either test wallet key.
pub fn authorized_backend() -> InMemoryStorageBackend {
    let public_key = |hex: &str| {
        DataSigningKey::from_hex(hex)
            .expect("valid test key")
            .public_key_hex()
    };
    InMemoryStorageBackend::new()
        .with_authorized_key(public_key(DATA_KEY_HEX))
        .with_authorized_key(public_key(OWNER_KEY_HEX))
}

/// A well-formed zonefile for `name`.
pub fn sample_record(name: &str) -> Record {
    Record::new()
        .with_field("$origin", name)
        .with_field("$ttl", 3600)
        .with_field("txt", format!("owner={}", name))
}

/// Counts calls into the wrapped backend.
pub struct CountingBackend<B> {
    inner: B,
    gets: AtomicUsize,
    puts: AtomicUsize,
    deletes: AtomicUsize,
    refuse_writes: AtomicBool,
}

impl<B: StorageBackend> CountingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            refuse_writes: AtomicBool::new(false),
        }
    }

    /// Make every put and delete fail (after being counted).
    pub fn refusing_writes(self) -> Self {
        self.refuse_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

impl<B: StorageBackend> StorageBackend for CountingBackend<B> {
    fn get_verified(
        &self,
        hash: &RecordHash,
        hash_fn: &dyn HashFunction,
    ) -> Result<Vec<u8>, BackendError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_verified(hash, hash_fn)
    }

    fn put(&self, txid: &TxId, hash: &RecordHash, content: &[u8]) -> bool {
        self.puts.fetch_add(1, Ordering::SeqCst);
        !self.refuse_writes.load(Ordering::SeqCst) && self.inner.put(txid, hash, content)
    }

    fn delete(&self, hash: &RecordHash, txid: &TxId, signing_key: &DataSigningKey) -> bool {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        !self.refuse_writes.load(Ordering::SeqCst) && self.inner.delete(hash, txid, signing_key)
    }
}

/// Backend that skips its own verification and always returns fixed bytes.
pub struct LyingBackend(pub Vec<u8>);

impl StorageBackend for LyingBackend {
    fn get_verified(
        &self,
        _hash: &RecordHash,
        _hash_fn: &dyn HashFunction,
    ) -> Result<Vec<u8>, BackendError> {
        Ok(self.0.clone())
    }

    fn put(&self, _txid: &TxId, _hash: &RecordHash, _content: &[u8]) -> bool {
        true
    }

    fn delete(&self, _hash: &RecordHash, _txid: &TxId, _signing_key: &DataSigningKey) -> bool {
        true
    }
}
