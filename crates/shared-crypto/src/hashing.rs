//! # Content Hashing
//!
//! Digest functions used to address records.
//!
//! The storage backend verifies what it returns with a caller-supplied
//! [`HashFunction`] (the blockchain-compatible digest). The Content Verifier
//! then checks the same bytes again with its own function, so a record read
//! from durable storage must satisfy both.

use sha2::{Digest, Sha256};
use shared_types::RecordHash;

/// A digest function producing record hashes.
pub trait HashFunction: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Hash raw bytes.
    fn digest(&self, data: &[u8]) -> RecordHash;

    /// Check raw bytes against an expected hash.
    fn matches(&self, data: &[u8], expected: &RecordHash) -> bool {
        self.digest(data) == *expected
    }
}

/// SHA-256 over the raw bytes.
///
/// This is both the record hash and the digest anchored on chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn digest(&self, data: &[u8]) -> RecordHash {
        RecordHash::from_bytes(sha256(data))
    }
}

/// One-shot SHA-256.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let hash = Sha256Hash.digest(b"abc");
        assert_eq!(
            hash.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Sha256Hash.digest(b"test"), Sha256Hash.digest(b"test"));
    }

    #[test]
    fn test_different_inputs() {
        assert_ne!(Sha256Hash.digest(b"input1"), Sha256Hash.digest(b"input2"));
    }

    #[test]
    fn test_matches() {
        let expected = Sha256Hash.digest(b"zonefile");
        assert!(Sha256Hash.matches(b"zonefile", &expected));
        assert!(!Sha256Hash.matches(b"zonefile!", &expected));
    }
}
