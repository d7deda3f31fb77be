//! # Peer Retrieval Subsystem (zc-02)
//!
//! Obtains a verified zonefile from an ordered list of peer nodes.
//!
//! ## Protocol
//!
//! ```text
//! for peer in peers (caller order):
//!     connect ──fail──→ next peer
//!     get_records({hash}) ──error──→ next peer
//!     entry for hash? ──no──→ next peer
//!     sha256(bytes) == hash? ──no──→ next peer
//!     return record            (later peers never contacted)
//! exhausted → None
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Caller Order | Peers are consulted strictly in the given order |
//! | 2 | First Verified Wins | The first verifying answer ends the search |
//! | 3 | No Retries | Each peer is asked at most once per call |
//! | 4 | Absence Is Normal | Exhaustion yields `None`, not an error |
//!
//! ## Architecture
//!
//! - **Domain Layer:** errors, retrieval metrics
//! - **Ports Layer:** `PeerRetrievalApi` (inbound), `PeerConnector`/`PeerSession` (outbound)
//! - **Service Layer:** `PeerRetrievalCoordinator`
//! - **Adapters Layer:** `MonitoredSession` wrapping every RPC session
//!
//! The wire protocol is not implemented here; hosts provide a `PeerConnector`.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::MonitoredSession;
pub use domain::errors::{NetworkError, PeerError};
pub use domain::metrics::{RetrievalMetrics, RetrievalStats};
pub use ports::inbound::PeerRetrievalApi;
pub use ports::outbound::{PeerConnector, PeerSession, RecordBatch};
pub use service::PeerRetrievalCoordinator;
