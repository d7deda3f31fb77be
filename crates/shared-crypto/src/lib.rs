//! # Shared Crypto - Content Verification and Signing Keys
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Record hashes, blockchain-compatible digests |
//! | `verifier` | SHA-256 over JCS bytes | Content Verifier (hash, verify) |
//! | `keys` | secp256k1 | Data signing key for authorized deletes |
//!
//! ## Security Properties
//!
//! - **Content addressing**: a record is trusted only if its recomputed hash
//!   equals the hash it was requested under.
//! - **secp256k1**: RFC 6979 deterministic signing, key material zeroized on drop
//!   (by `k256` for signing keys, explicitly for decoded hex secrets).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod keys;
pub mod verifier;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, HashFunction, Sha256Hash};
pub use keys::{derive_data_signing_key, verify_with_public_key, DataSigningKey, WalletKeys};
pub use verifier::ContentVerifier;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
