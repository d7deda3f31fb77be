//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Record could not be brought into canonical form
    #[error("Canonicalization failed: {0}")]
    Canonicalization(String),

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid public key
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Wallet holds no key usable for data signing
    #[error("No data signing key available in wallet")]
    MissingDataKey,

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}
