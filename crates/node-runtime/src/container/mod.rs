//! # Subsystem Container
//!
//! Builds the zonefile subsystems from `NodeConfig` and hands out the wired
//! `ZonefileService`.

pub mod config;
pub mod subsystems;

pub use config::{ConfigError, LoggingConfig, NodeConfig, PeersConfig};
pub use subsystems::SubsystemContainer;
