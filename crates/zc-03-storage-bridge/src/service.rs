//! # Storage-Authority Bridge Service
//!
//! Implements `StorageAuthorityApi` over the three driven ports.

use std::sync::Arc;

use shared_crypto::{derive_data_signing_key, ContentVerifier, HashFunction, Sha256Hash, WalletKeys};
use shared_types::{AuthorizationRecord, Record, RecordHash, TxId};

use crate::domain::errors::BridgeError;
use crate::ports::inbound::StorageAuthorityApi;
use crate::ports::outbound::{NameRules, StateEngine, StorageBackend};

/// The Storage-Authority Bridge.
pub struct StorageAuthorityBridge {
    state: Arc<dyn StateEngine>,
    names: Arc<dyn NameRules>,
    backend: Arc<dyn StorageBackend>,
    /// Digest the backend verifies reads with (blockchain-compatible).
    compat_hash: Arc<dyn HashFunction>,
    verifier: ContentVerifier,
}

impl StorageAuthorityBridge {
    pub fn new(
        state: Arc<dyn StateEngine>,
        names: Arc<dyn NameRules>,
        backend: Arc<dyn StorageBackend>,
    ) -> Self {
        Self {
            state,
            names,
            backend,
            compat_hash: Arc::new(Sha256Hash),
            verifier: ContentVerifier::new(),
        }
    }

    /// Use a different blockchain-compatible digest for backend reads.
    pub fn with_compat_hash(mut self, compat_hash: Arc<dyn HashFunction>) -> Self {
        self.compat_hash = compat_hash;
        self
    }

    fn canonicalize(&self, record: &Record) -> Result<(Vec<u8>, RecordHash), BridgeError> {
        self.verifier
            .canonicalize_and_hash(record)
            .map_err(|e| BridgeError::Canonicalization(e.to_string()))
    }

    fn lookup_txid(
        &self,
        record: &Record,
        hash: RecordHash,
    ) -> Result<Option<AuthorizationRecord>, BridgeError> {
        let Some(name) = record.origin() else {
            tracing::debug!("[zc-03] Missing '$origin' in zonefile {}", hash);
            return Err(BridgeError::MissingOrigin);
        };

        if !self.names.is_valid_name(name) {
            tracing::debug!("[zc-03] Invalid name '{}' in zonefile {}", name, hash);
            return Err(BridgeError::InvalidName {
                name: name.to_string(),
            });
        }

        match self.state.resolve_txid(name, &hash) {
            Some(txid) => Ok(Some(AuthorizationRecord {
                hash,
                name: name.to_string(),
                txid,
            })),
            None => {
                tracing::debug!("[zc-03] No txid for zonefile hash {} (for '{}')", hash, name);
                Ok(None)
            }
        }
    }

    /// Both gates: currency, then anchoring transaction.
    ///
    /// Returns the canonical bytes alongside the authorization so callers
    /// upload exactly what was hashed.
    fn authorize(&self, record: &Record) -> Result<(Vec<u8>, AuthorizationRecord), BridgeError> {
        let (bytes, hash) = self.canonicalize(record)?;

        if !self.state.is_current_hash(&hash) {
            return Err(BridgeError::UnknownHash { hash });
        }

        let auth = self
            .lookup_txid(record, hash)?
            .ok_or_else(|| BridgeError::MissingTransaction {
                hash,
                name: record.origin().unwrap_or_default().to_string(),
            })?;

        Ok((bytes, auth))
    }

    fn try_publish(&self, record: &Record) -> Result<TxId, BridgeError> {
        let (bytes, auth) = self.authorize(record)?;

        if !self.backend.put(&auth.txid, &auth.hash, &bytes) {
            return Err(BridgeError::Storage(format!(
                "failed to store zonefile {} ({}) for '{}'",
                auth.hash, auth.txid, auth.name
            )));
        }
        Ok(auth.txid)
    }

    fn try_retract(&self, record: &Record, keys: &WalletKeys) -> Result<TxId, BridgeError> {
        let (_, auth) = self.authorize(record)?;

        let signing_key =
            derive_data_signing_key(keys).map_err(|e| BridgeError::KeyDerivation(e.to_string()))?;

        if !self.backend.delete(&auth.hash, &auth.txid, &signing_key) {
            return Err(BridgeError::Storage(format!(
                "failed to delete zonefile {} ({}) for '{}'",
                auth.hash, auth.txid, auth.name
            )));
        }
        Ok(auth.txid)
    }
}

impl StorageAuthorityApi for StorageAuthorityBridge {
    fn fetch_from_storage(&self, hash: &RecordHash) -> Result<Record, BridgeError> {
        if !self.state.is_current_hash(hash) {
            return Err(BridgeError::UnknownHash { hash: *hash });
        }

        let data = self
            .backend
            .get_verified(hash, self.compat_hash.as_ref())
            .map_err(|e| BridgeError::Storage(format!("failed to get data: {}", e)))?;

        let actual = self.verifier.hash_bytes(&data);
        if actual != *hash {
            tracing::warn!("[zc-03] Corrupt zonefile {} from storage (got {})", hash, actual);
            return Err(BridgeError::CorruptRemote {
                expected: *hash,
                actual,
            });
        }

        Record::from_json_bytes(&data).map_err(|e| {
            tracing::warn!("[zc-03] Undecodable zonefile {} from storage: {}", hash, e);
            BridgeError::Storage(format!("undecodable zonefile {}: {}", hash, e))
        })
    }

    fn resolve_txid(&self, record: &Record) -> Result<Option<AuthorizationRecord>, BridgeError> {
        let (_, hash) = self.canonicalize(record)?;
        self.lookup_txid(record, hash)
    }

    fn publish(&self, record: &Record) -> Result<TxId, BridgeError> {
        let result = self.try_publish(record);
        match &result {
            Ok(txid) => tracing::info!("[zc-03] 📤 Published zonefile (txid {})", txid),
            Err(e) => tracing::error!("[zc-03] Publish rejected: {}", e),
        }
        result
    }

    fn retract(&self, record: &Record, keys: &WalletKeys) -> Result<TxId, BridgeError> {
        let result = self.try_retract(record, keys);
        match &result {
            Ok(txid) => tracing::info!("[zc-03] 🗑️ Retracted zonefile (txid {})", txid),
            Err(e) => tracing::error!("[zc-03] Retract rejected: {}", e),
        }
        result
    }
}
