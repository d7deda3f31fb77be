//! # Storage-Authority Bridge (zc-03)
//!
//! Couples durable zonefile storage to blockchain authorization. A zonefile
//! may be written to or deleted from the storage backend only when:
//!
//! 1. its hash is the presently-authoritative hash for some name, and
//! 2. the state engine can name the transaction that anchored that hash to
//!    the record's `$origin`.
//!
//! The transaction id is then the authorization token the backend checks.
//!
//! ## Flow
//!
//! ```text
//! record ──canonicalize──→ hash ──is_current_hash?──no──→ UnknownHash
//!                                      │yes
//!                     $origin ──valid name?──no──→ MissingOrigin / InvalidName
//!                                      │yes
//!                    resolve_txid(name, hash) ──None──→ MissingTransaction
//!                                      │txid
//!                          backend.put / backend.delete
//! ```
//!
//! ## Consistency
//!
//! The currency check and the backend mutation are not one transaction: the
//! authoritative hash may change between them. Callers needing stronger
//! guarantees must serialize against the state engine themselves.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{InMemoryStateEngine, InMemoryStorageBackend};
pub use domain::errors::BridgeError;
pub use domain::naming::BlockstackNameRules;
pub use ports::inbound::StorageAuthorityApi;
pub use ports::outbound::{BackendError, NameRules, StateEngine, StorageBackend};
pub use service::StorageAuthorityBridge;
