//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors produced when parsing the text encoding of a `RecordHash`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Text is not the expected number of hex characters.
    #[error("Invalid hash length: expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Text contains non-hex characters.
    #[error("Invalid hash encoding: {0}")]
    InvalidHex(String),
}

/// Errors produced when parsing a `host:port` peer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointParseError {
    /// No `:` separator between host and port.
    #[error("Missing port in peer endpoint '{0}'")]
    MissingPort(String),

    /// Host part is empty.
    #[error("Empty host in peer endpoint '{0}'")]
    EmptyHost(String),

    /// Port is not a valid u16.
    #[error("Invalid port in peer endpoint '{endpoint}': {reason}")]
    InvalidPort { endpoint: String, reason: String },
}

/// Errors produced when decoding or canonicalizing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Bytes are not valid JSON.
    #[error("Invalid record JSON: {0}")]
    InvalidJson(String),

    /// JSON is valid but the top-level value is not an object.
    #[error("Record must be a JSON object")]
    NotAnObject,

    /// Canonical serialization failed.
    #[error("Canonicalization failed: {0}")]
    Canonicalization(String),
}
