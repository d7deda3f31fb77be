//! # Zonefile Cache (zc-01)
//!
//! Filesystem-backed, content-addressed cache of zonefiles. Every blob is
//! stored under the hex encoding of its own hash and re-verified on every
//! read.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Content Addressing | A blob's recomputed hash must equal its filename |
//! | 2 | Corruption Eviction | A blob failing verification is deleted on read |
//! | 3 | Durable Writes | Data is fsynced before `put` returns |
//! | 4 | Atomic Writes | Blobs appear under their key only when complete |
//! | 5 | Infallible Removal | `remove` never fails the caller |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Configuration, errors and sweep reports
//! - `ports/` - Driving port (`ZonefileCacheApi`)
//! - `service/` - `LocalCacheStore`, the filesystem implementation
//!
//! ## Usage
//!
//! ```ignore
//! use zc_01_zonefile_cache::{CacheConfig, LocalCacheStore, ZonefileCacheApi};
//!
//! let cache = LocalCacheStore::new(CacheConfig::new("/var/lib/zonefiles"))?;
//! let hash = cache.put(&record)?;
//! let cached = cache.get(&hash)?;
//! ```

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::config::CacheConfig;
pub use domain::errors::CacheError;
pub use domain::sweep::SweepReport;
pub use ports::inbound::ZonefileCacheApi;
pub use service::LocalCacheStore;
