//! # Local Cache Store
//!
//! The filesystem implementation of `ZonefileCacheApi`.
//!
//! ## Layout
//!
//! One file per zonefile, directly under `zonefile_dir`, named by the hex
//! hash and holding the canonical bytes. Writes land in a uniquely named
//! hidden temp file first and are renamed onto the key once fsynced, so a
//! reader never sees a partially written blob under a valid name.


use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use shared_crypto::ContentVerifier;
use shared_types::{Record, RecordHash};
use uuid::Uuid;

use crate::domain::config::CacheConfig;
use crate::domain::errors::CacheError;
use crate::domain::sweep::SweepReport;
use crate::ports::inbound::ZonefileCacheApi;

/// Filesystem-backed zonefile cache.
pub struct LocalCacheStore {
    config: CacheConfig,
    verifier: ContentVerifier,
}

impl LocalCacheStore {
    /// Open the cache described by `config`.
    ///
    /// Creates the directory when `config.create_dir` is set.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        if config.create_dir {
            fs::create_dir_all(&config.zonefile_dir)
                .map_err(|e| CacheError::storage(&config.zonefile_dir, e))?;
        }
        tracing::info!(
            "[zc-01] 📁 Zonefile cache at {}",
            config.zonefile_dir.display()
        );
        Ok(Self {
            config,
            verifier: ContentVerifier::new(),
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Path of the blob for `hash`.
    pub fn entry_path(&self, hash: &RecordHash) -> PathBuf {
        self.config.zonefile_dir.join(hash.to_hex())
    }

    fn temp_path(&self, hash: &RecordHash) -> PathBuf {
        self.config
            .zonefile_dir
            .join(format!(".{}.{}.tmp", hash, Uuid::new_v4().simple()))
    }

    /// Write `bytes` to `path` via temp file, fsync and rename (INVARIANT-3, INVARIANT-4).
    fn write_durably(&self, hash: &RecordHash, path: &Path, bytes: &[u8]) -> Result<(), CacheError> {
        let temp_path = self.temp_path(hash);

        let written = (|| -> io::Result<()> {
            let mut file = File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.flush()?;
            file.sync_all()?;
            fs::rename(&temp_path, path)
        })();

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(CacheError::storage(path, e));
        }

        sync_dir(&self.config.zonefile_dir);
        Ok(())
    }

    /// The record in `data`, if it hashes to `hash` and parses.
    fn decode(&self, hash: &RecordHash, data: &[u8]) -> Option<Record> {
        if !self.verifier.verify(data, hash) {
            return None;
        }
        match Record::from_json_bytes(data) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("[zc-01] Undecodable zonefile '{}': {}", hash, e);
                None
            }
        }
    }

    /// Unlink a directory entry by name. Never fails the caller.
    fn remove_entry(&self, name: &str) -> bool {
        let path = self.config.zonefile_dir.join(name);
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!("[zc-01] Failed to remove {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl ZonefileCacheApi for LocalCacheStore {
    fn get(&self, hash: &RecordHash) -> Result<Record, CacheError> {
        let path = self.entry_path(hash);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound { hash: *hash });
            }
            Err(e) => return Err(CacheError::storage(&path, e)),
        };

        if let Some(record) = self.decode(hash, &data) {
            return Ok(record);
        }

        // A concurrent put may have renamed a valid blob over the one read.
        if let Ok(data) = fs::read(&path) {
            if let Some(record) = self.decode(hash, &data) {
                return Ok(record);
            }
        }

        tracing::debug!("[zc-01] Corrupt zonefile '{}'; uncaching", hash);
        self.remove(hash);
        Err(CacheError::Corrupt { hash: *hash })
    }

    fn put(&self, record: &Record) -> Result<RecordHash, CacheError> {
        let (bytes, hash) = self
            .verifier
            .canonicalize_and_hash(record)
            .map_err(|e| CacheError::Canonicalization(e.to_string()))?;
        let path = self.entry_path(&hash);

        self.write_durably(&hash, &path, &bytes)?;

        tracing::debug!("[zc-01] 💾 Cached zonefile {} ({} bytes)", hash, bytes.len());
        Ok(hash)
    }

    fn remove(&self, hash: &RecordHash) -> bool {
        self.remove_entry(&hash.to_hex())
    }

    fn contains(&self, hash: &RecordHash) -> bool {
        self.entry_path(hash).is_file()
    }

    fn list(&self) -> Result<Vec<String>, CacheError> {
        let dir = &self.config.zonefile_dir;
        let entries = fs::read_dir(dir).map_err(|e| CacheError::storage(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CacheError::storage(dir, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn sweep(&self) -> Result<SweepReport, CacheError> {
        let mut report = SweepReport::new();
        for name in self.list()? {
            let removed = self.remove_entry(&name);
            report.record(name, removed);
        }

        tracing::info!(
            "[zc-01] 🧹 Swept zonefile cache: {} removed, {} failed",
            report.removed,
            report.failed.len()
        );
        Ok(report)
    }
}

/// Persist the rename itself. Best effort: the blob is already complete.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        tracing::debug!("[zc-01] Directory sync failed for {}: {}", dir.display(), e);
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}
