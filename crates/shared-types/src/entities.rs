//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Content**: `Record`, `RecordHash`
//! - **Authorization**: `TxId`, `AuthorizationRecord`
//! - **Networking**: `PeerEndpoint`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::{EndpointParseError, HashParseError, RecordError};

// =============================================================================
// CLUSTER A: CONTENT
// =============================================================================

/// Field naming the subject of a zonefile.
pub const ORIGIN_FIELD: &str = "$origin";

/// A 32-byte content hash identifying a record.
///
/// The canonical text encoding is 64 lower-case hex characters; this is also
/// the cache filename and the key used by storage backends and peers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr)]
pub struct RecordHash([u8; 32]);

impl RecordHash {
    /// Length of the raw digest in bytes.
    pub const LEN: usize = 32;

    /// Length of the canonical text encoding.
    pub const HEX_LEN: usize = Self::LEN * 2;

    /// Wrap a raw digest.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Canonical text encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse the text encoding (either case).
    pub fn from_hex(s: &str) -> Result<Self, HashParseError> {
        if s.len() != Self::HEX_LEN {
            return Err(HashParseError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHash({})", self.to_hex())
    }
}

impl FromStr for RecordHash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A zonefile: a JSON object of named fields.
///
/// The `$origin` field names the subject. Identity is the hash of
/// [`Record::canonical_bytes`], so two records with the same fields compare
/// and hash equal no matter how they were built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from an existing field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Subject name from `$origin`, if present and a string.
    pub fn origin(&self) -> Option<&str> {
        self.fields.get(ORIGIN_FIELD).and_then(Value::as_str)
    }

    /// Decode a record from JSON bytes.
    ///
    /// The top-level value must be an object.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| RecordError::InvalidJson(e.to_string()))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Canonical byte form: RFC 8785 JSON (sorted keys, compact separators).
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, RecordError> {
        serde_jcs::to_vec(&self.fields).map_err(|e| RecordError::Canonicalization(e.to_string()))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

// =============================================================================
// CLUSTER B: AUTHORIZATION
// =============================================================================

/// Blockchain transaction id.
///
/// Opaque to this workspace; produced by the state engine and handed to the
/// storage backend as the proof-of-payment token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn new(txid: impl Into<String>) -> Self {
        Self(txid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The transaction that made `hash` authoritative for `name`.
///
/// Only produced by a successful state engine lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRecord {
    /// Record hash the transaction anchored.
    pub hash: RecordHash,
    /// Subject name.
    pub name: String,
    /// Anchoring transaction.
    pub txid: TxId,
}

// =============================================================================
// CLUSTER C: NETWORKING
// =============================================================================

/// A remote node serving records by hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct PeerEndpoint {
    pub host: String,
    pub port: u16,
}

impl PeerEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for PeerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for PeerEndpoint {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| EndpointParseError::MissingPort(s.to_string()))?;
        if host.is_empty() {
            return Err(EndpointParseError::EmptyHost(s.to_string()));
        }
        let port = port
            .parse::<u16>()
            .map_err(|e| EndpointParseError::InvalidPort {
                endpoint: s.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(host, port))
    }
}
