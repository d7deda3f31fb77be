//! # Node Configuration
//!
//! Unified configuration for the zonefile subsystems.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <path>`)
//! 3. Environment: `ZC_ZONEFILE_DIR`, `ZC_PEERS`, `ZC_LOG`

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use shared_types::{EndpointParseError, PeerEndpoint};
use thiserror::Error;
use zc_01_zonefile_cache::CacheConfig;

/// Overrides the cache directory.
pub const ENV_ZONEFILE_DIR: &str = "ZC_ZONEFILE_DIR";

/// Overrides the peer list: comma-separated `host:port`.
pub const ENV_PEERS: &str = "ZC_PEERS";

/// Overrides the log filter.
pub const ENV_LOG: &str = "ZC_LOG";

/// Complete node configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Local cache configuration.
    pub cache: CacheConfig,
    /// Peer retrieval configuration.
    pub peers: PeersConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Peer retrieval configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PeersConfig {
    /// Peers consulted on a lookup miss, in this order.
    pub endpoints: Vec<PeerEndpoint>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `zc_02_peer_retrieval=debug`.
    pub filter: String,
    /// Include thread ids in log lines.
    pub thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            thread_ids: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An entry of `ZC_PEERS` is not a valid `host:port`.
    #[error("Invalid peer in ZC_PEERS: {0}")]
    InvalidPeer(#[from] EndpointParseError),
}

impl NodeConfig {
    /// Load from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config
            .apply_overrides(|key| std::env::var(key).ok())
            .context("Applying environment overrides")?;
        Ok(config)
    }

    /// Parse a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Parsing config file {}", path.display()))
    }

    /// Parse TOML text. Missing sections keep their defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from a variable lookup (normally the process
    /// environment). Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = lookup(ENV_ZONEFILE_DIR) {
            self.cache.zonefile_dir = PathBuf::from(dir);
        }

        if let Some(peers) = lookup(ENV_PEERS) {
            self.peers.endpoints = peers
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<Vec<PeerEndpoint>, _>>()?;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }

        Ok(())
    }
}
