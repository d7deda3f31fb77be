//! # Domain Errors
//!
//! Error types for the zonefile cache.
//!
//! `NotFound` and `Corrupt` are normal read-path outcomes: lookups fall
//! through to the next source on either. Only `Storage` signals an I/O fault.

use shared_types::RecordHash;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No blob is cached under this hash.
    #[error("Zonefile not cached: {hash}")]
    NotFound { hash: RecordHash },

    /// Blob did not verify against its key and has been evicted (INVARIANT-2).
    #[error("Corrupt zonefile {hash} evicted from cache (INVARIANT-2)")]
    Corrupt { hash: RecordHash },

    /// Filesystem failure while opening, writing, syncing or renaming.
    #[error("Cache storage error at {path}: {source}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be canonicalized for writing.
    #[error("Cannot cache record: {0}")]
    Canonicalization(String),
}

impl CacheError {
    pub(crate) fn storage(path: &std::path::Path, source: std::io::Error) -> Self {
        CacheError::Storage {
            path: path.display().to_string(),
            source,
        }
    }

    /// True for outcomes that mean "no usable copy here" rather than a fault.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::NotFound { .. } | CacheError::Corrupt { .. })
    }
}
