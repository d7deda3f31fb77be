//! # Data Signing Keys (secp256k1)
//!
//! Resolves the key used to authenticate deletes against durable storage
//! from caller-supplied wallet key material.
//!
//! ## Resolution Order
//!
//! 1. `data_privkey` if the wallet carries one
//! 2. `owner_privkey` otherwise
//!
//! A wallet with neither yields `CryptoError::MissingDataKey`.

use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::CryptoError;

/// Wallet key material as hex-encoded secp256k1 secrets.
#[derive(Clone, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct WalletKeys {
    /// Dedicated data key.
    pub data_privkey: Option<String>,
    /// Name owner key, used when no data key is present.
    pub owner_privkey: Option<String>,
}

impl WalletKeys {
    /// Wallet holding only a data key.
    pub fn with_data_key(hex_key: impl Into<String>) -> Self {
        Self {
            data_privkey: Some(hex_key.into()),
            owner_privkey: None,
        }
    }

    /// Wallet holding only an owner key.
    pub fn with_owner_key(hex_key: impl Into<String>) -> Self {
        Self {
            data_privkey: None,
            owner_privkey: Some(hex_key.into()),
        }
    }
}

impl std::fmt::Debug for WalletKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletKeys")
            .field("data_privkey", &self.data_privkey.as_ref().map(|_| "<redacted>"))
            .field("owner_privkey", &self.owner_privkey.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// secp256k1 key authenticating data deletes.
pub struct DataSigningKey {
    signing_key: SigningKey,
}

impl DataSigningKey {
    /// Create from a hex-encoded 32-byte secret.
    pub fn from_hex(hex_key: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_key.trim(), &mut bytes)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        let result = Self::from_bytes(bytes);
        bytes.zeroize();
        result
    }

    /// Create from secret key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Compressed SEC1 public key, hex encoded.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().to_sec1_bytes())
    }

    /// Sign a message (deterministic RFC 6979), returning r||s.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let sig: Signature = self.signing_key.sign(message);
        sig.to_bytes().into()
    }

    /// Verify an r||s signature made by this key.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> Result<(), CryptoError> {
        let sig =
            Signature::from_slice(signature).map_err(|_| CryptoError::SignatureVerificationFailed)?;
        let verifying_key: &VerifyingKey = self.signing_key.verifying_key();
        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

impl std::fmt::Debug for DataSigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSigningKey")
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}

/// Verify an r||s signature against a hex-encoded SEC1 public key.
pub fn verify_with_public_key(
    public_key_hex: &str,
    message: &[u8],
    signature: &[u8; 64],
) -> Result<(), CryptoError> {
    let bytes =
        hex::decode(public_key_hex.trim()).map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
    let verifying_key = VerifyingKey::from_sec1_bytes(&bytes)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
    let sig =
        Signature::from_slice(signature).map_err(|_| CryptoError::SignatureVerificationFailed)?;
    verifying_key
        .verify(message, &sig)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}

/// Resolve the data signing key from wallet key material.
pub fn derive_data_signing_key(keys: &WalletKeys) -> Result<DataSigningKey, CryptoError> {
    match (&keys.data_privkey, &keys.owner_privkey) {
        (Some(data), _) => DataSigningKey::from_hex(data),
        (None, Some(owner)) => DataSigningKey::from_hex(owner),
        (None, None) => Err(CryptoError::MissingDataKey),
    }
}
