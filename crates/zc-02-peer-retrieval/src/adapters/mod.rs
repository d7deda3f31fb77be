//! # Adapters Module
//!
//! - `monitored`: instrumentation wrapper around every peer RPC session

pub mod monitored;

pub use monitored::MonitoredSession;
