//! # Content Verifier
//!
//! Canonicalizes records and checks content against expected hashes.
//! Pure functions, no side effects.

use shared_types::{Record, RecordHash};

use crate::errors::CryptoError;
use crate::hashing::{HashFunction, Sha256Hash};

/// Computes and checks record hashes.
///
/// The hash of a record is the SHA-256 of its canonical (JCS) bytes. Cache
/// blobs, peer responses and storage reads are all checked with
/// [`ContentVerifier::verify`] before being trusted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentVerifier {
    hasher: Sha256Hash,
}

impl ContentVerifier {
    /// Create a verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical bytes of `record`.
    pub fn canonicalize(&self, record: &Record) -> Result<Vec<u8>, CryptoError> {
        record
            .canonical_bytes()
            .map_err(|e| CryptoError::Canonicalization(e.to_string()))
    }

    /// Hash of `record`'s canonical bytes.
    ///
    /// Field insertion order does not affect the result.
    pub fn hash(&self, record: &Record) -> Result<RecordHash, CryptoError> {
        Ok(self.hash_bytes(&self.canonicalize(record)?))
    }

    /// Canonical bytes and their hash in one pass.
    pub fn canonicalize_and_hash(
        &self,
        record: &Record,
    ) -> Result<(Vec<u8>, RecordHash), CryptoError> {
        let bytes = self.canonicalize(record)?;
        let hash = self.hash_bytes(&bytes);
        Ok((bytes, hash))
    }

    /// Hash of already-serialized bytes.
    pub fn hash_bytes(&self, bytes: &[u8]) -> RecordHash {
        self.hasher.digest(bytes)
    }

    /// Whether `bytes` hash to `expected`.
    pub fn verify(&self, bytes: &[u8], expected: &RecordHash) -> bool {
        self.hasher.matches(bytes, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record::new()
            .with_field("$origin", "alice.id")
            .with_field("$ttl", 3600)
            .with_field("uri", json!([{"name": "_http._tcp", "target": "https://example.org"}]))
    }

    #[test]
    fn test_hash_is_order_independent() {
        let verifier = ContentVerifier::new();
        let reordered = Record::new()
            .with_field("uri", json!([{"target": "https://example.org", "name": "_http._tcp"}]))
            .with_field("$ttl", 3600)
            .with_field("$origin", "alice.id");

        assert_eq!(
            verifier.hash(&sample()).unwrap(),
            verifier.hash(&reordered).unwrap()
        );
    }

    #[test]
    fn test_any_field_change_changes_identity() {
        let verifier = ContentVerifier::new();
        let changed = sample().with_field("$ttl", 3601);
        assert_ne!(
            verifier.hash(&sample()).unwrap(),
            verifier.hash(&changed).unwrap()
        );
    }

    #[test]
    fn test_verify_canonical_bytes() {
        let verifier = ContentVerifier::new();
        let (bytes, hash) = verifier.canonicalize_and_hash(&sample()).unwrap();

        assert!(verifier.verify(&bytes, &hash));
        assert!(!verifier.verify(b"{}", &hash));
    }
}
