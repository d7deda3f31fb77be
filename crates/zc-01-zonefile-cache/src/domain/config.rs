//! # Cache Configuration
//!
//! Passed explicitly to `LocalCacheStore::new`; there is no process-wide
//! default directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for the local zonefile cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding one file per cached zonefile.
    pub zonefile_dir: PathBuf,

    /// Create the directory (and parents) on construction (default: true).
    pub create_dir: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            zonefile_dir: PathBuf::from("./data/zonefiles"),
            create_dir: true,
        }
    }
}

impl CacheConfig {
    /// Configuration for the given directory.
    pub fn new(zonefile_dir: impl Into<PathBuf>) -> Self {
        Self {
            zonefile_dir: zonefile_dir.into(),
            ..Self::default()
        }
    }

    /// Set whether the directory is created on construction.
    pub fn with_create_dir(mut self, create: bool) -> Self {
        self.create_dir = create;
        self
    }

    pub fn zonefile_dir(&self) -> &Path {
        &self.zonefile_dir
    }
}
