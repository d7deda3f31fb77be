//! Domain Errors for Peer Retrieval

use std::fmt;
use thiserror::Error;

/// Errors from establishing or using a peer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Operation timed out waiting for response
    Timeout,
    /// Remote peer refused connection
    ConnectionRefused,
    /// Host could not be resolved or reached
    Unreachable(String),
    /// Response could not be decoded
    Protocol(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Timeout => write!(f, "network operation timed out"),
            NetworkError::ConnectionRefused => write!(f, "connection refused by peer"),
            NetworkError::Unreachable(reason) => write!(f, "peer unreachable: {}", reason),
            NetworkError::Protocol(reason) => write!(f, "protocol error: {}", reason),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Failure of a single `get_records` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerError {
    /// The peer answered with an explicit error message.
    #[error("peer returned error: {0}")]
    Remote(String),

    /// The call did not complete.
    #[error(transparent)]
    Network(#[from] NetworkError),
}
