//! # Cache Sweep Report
//!
//! A sweep removes every entry in the cache directory, valid or not. It is
//! full invalidation, not a staleness check.

/// Result of a cache sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Entries removed.
    pub removed: usize,
    /// Entry names that could not be removed (non-fatal).
    pub failed: Vec<String>,
}

impl SweepReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries visited.
    pub fn visited(&self) -> usize {
        self.removed + self.failed.len()
    }

    /// True if every visited entry was removed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn record(&mut self, name: String, removed: bool) {
        if removed {
            self.removed += 1;
        } else {
            self.failed.push(name);
        }
    }
}
