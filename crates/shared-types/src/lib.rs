//! # Shared Types Crate
//!
//! This crate contains the zonefile entities shared by every subsystem of the
//! workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Record`, `RecordHash`, `PeerEndpoint`,
//!   `TxId` and `AuthorizationRecord` are defined here and nowhere else.
//! - **Content Addressing**: a record's identity is the hash of its canonical
//!   bytes. Any field change produces a different identity.
//! - **Canonical Form**: canonical bytes are RFC 8785 (JCS) JSON, so the same
//!   field set always serializes identically regardless of insertion order.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
