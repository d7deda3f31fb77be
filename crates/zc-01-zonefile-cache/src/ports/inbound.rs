//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the zonefile cache.

use crate::domain::errors::CacheError;
use crate::domain::sweep::SweepReport;
use shared_types::{Record, RecordHash};

/// Primary API for the local zonefile cache.
///
/// Implementations must enforce all domain invariants. All methods take
/// `&self`. Writes are rename-into-place, so a reader never observes a
/// partial blob. A `get` re-reads a failing blob before evicting it; a
/// `put` landing between that re-read and the unlink is still evicted and
/// is recovered by the next write-back.
pub trait ZonefileCacheApi: Send + Sync {
    /// Read and verify the zonefile cached under `hash`.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: nothing cached under this hash
    /// - `Corrupt`: blob failed verification and was removed (INVARIANT-2)
    /// - `Storage`: the blob exists but could not be read
    fn get(&self, hash: &RecordHash) -> Result<Record, CacheError>;

    /// Canonicalize, hash and durably store `record`.
    ///
    /// Idempotent: storing the same record twice leaves one identical blob.
    ///
    /// ## Errors
    ///
    /// - `Storage`: open, write, sync or rename failed; no partial blob remains
    fn put(&self, record: &Record) -> Result<RecordHash, CacheError>;

    /// Delete the blob under `hash`. Returns whether a file was removed.
    fn remove(&self, hash: &RecordHash) -> bool;

    /// Whether a blob exists under `hash` (without verifying it).
    fn contains(&self, hash: &RecordHash) -> bool;

    /// Names of all entries in the cache directory.
    fn list(&self) -> Result<Vec<String>, CacheError>;

    /// Remove every entry in the cache directory unconditionally.
    fn sweep(&self) -> Result<SweepReport, CacheError>;
}
