//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this subsystem **requires** the host application
//! to implement. The RPC wire format lives entirely behind them.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync` so lookups can run on separate
//! threads. Timeouts belong to the implementation; the coordinator never
//! applies its own.

use std::collections::HashMap;

use shared_types::{PeerEndpoint, RecordHash};

use crate::domain::errors::{NetworkError, PeerError};

/// Raw zonefile bytes keyed by the hash they were requested under.
pub type RecordBatch = HashMap<RecordHash, Vec<u8>>;

/// Opens RPC sessions to peers.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct JsonRpcConnector { timeout: Duration }
///
/// impl PeerConnector for JsonRpcConnector {
///     fn connect(&self, peer: &PeerEndpoint) -> Result<Box<dyn PeerSession>, NetworkError> {
///         let stream = TcpStream::connect_timeout(&resolve(peer)?, self.timeout)?;
///         Ok(Box::new(JsonRpcSession::new(stream)))
///     }
/// }
/// ```
pub trait PeerConnector: Send + Sync {
    /// Open a session to `peer`.
    fn connect(&self, peer: &PeerEndpoint) -> Result<Box<dyn PeerSession>, NetworkError>;
}

/// An open RPC session with one peer.
pub trait PeerSession: Send {
    /// Ask the peer for the zonefiles with the given hashes.
    ///
    /// The returned map holds the raw bytes the peer claims for each hash it
    /// has; hashes the peer does not hold are simply absent. Content is
    /// untrusted until verified by the caller.
    fn get_records(&self, hashes: &[RecordHash]) -> Result<RecordBatch, PeerError>;
}
