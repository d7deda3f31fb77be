//! # Domain Errors
//!
//! Every failure of the bridge is recoverable at the call site. Write-path
//! failures are returned, logged, and never abort a batch.

use shared_types::RecordHash;
use thiserror::Error;

/// Errors from the Storage-Authority Bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Hash is not presently authoritative for any name.
    #[error("Unknown zonefile hash {hash}")]
    UnknownHash { hash: RecordHash },

    /// No transaction anchors this hash to this name.
    #[error("No txid for zonefile hash {hash} (for '{name}')")]
    MissingTransaction { hash: RecordHash, name: String },

    /// Record has no `$origin` field.
    #[error("Missing '$origin' in zonefile")]
    MissingOrigin,

    /// `$origin` is rejected by the naming rules.
    #[error("Invalid name in zonefile: '{name}'")]
    InvalidName { name: String },

    /// Backend returned content that does not hash to the requested hash.
    #[error("Corrupt zonefile from storage: expected {expected}, got {actual}")]
    CorruptRemote {
        expected: RecordHash,
        actual: RecordHash,
    },

    /// Backend I/O failure or refusal.
    #[error("Storage backend error: {0}")]
    Storage(String),

    /// Data signing key could not be derived from wallet key material.
    #[error("Cannot derive data signing key: {0}")]
    KeyDerivation(String),

    /// Record could not be canonicalized.
    #[error("Canonicalization failed: {0}")]
    Canonicalization(String),
}

impl BridgeError {
    /// True when the failure is an authorization refusal rather than a fault.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            BridgeError::UnknownHash { .. } | BridgeError::MissingTransaction { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BridgeError::MissingTransaction {
            hash: RecordHash::from_bytes([0xCD; 32]),
            name: "alice.id".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("alice.id"));
        assert!(msg.contains("cdcd"));
        assert!(err.is_unauthorized());
        assert!(!BridgeError::MissingOrigin.is_unauthorized());
    }
}
