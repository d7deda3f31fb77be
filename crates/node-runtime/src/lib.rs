//! # Node Runtime Library
//!
//! Wires the zonefile subsystems together. The `zonefile-node` binary in
//! `main.rs` is a thin CLI over this library.
//!
//! ## Modules
//!
//! - `container/` - Node configuration and the subsystem container
//! - `service` - `ZonefileService`: cache -> storage -> peers lookup, batch publish/retract
//! - `logging` - `tracing-subscriber` bootstrap

pub mod container;
pub mod logging;
pub mod service;

pub use container::{ConfigError, LoggingConfig, NodeConfig, PeersConfig, SubsystemContainer};
pub use service::{BatchReport, LookupSource, ZonefileService};
