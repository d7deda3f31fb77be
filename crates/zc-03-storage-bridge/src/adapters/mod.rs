//! # Adapters Module
//!
//! - `memory`: in-memory state engine and storage backend for single-node
//!   setups and tests

pub mod memory;

pub use memory::{InMemoryStateEngine, InMemoryStorageBackend};
