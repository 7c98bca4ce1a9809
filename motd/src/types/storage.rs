//! Storage information types

use std::path::PathBuf;

use super::Usage;
use crate::format::clamp_percent;

/// Usage of one mounted filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSnapshot {
    /// Where the filesystem is mounted
    pub mount_point: PathBuf,
    /// Used (total minus free) and total bytes
    pub usage: Usage,
    /// Bytes an unprivileged user can still write
    pub available_bytes: u64,
}

impl StorageSnapshot {
    /// Usage percentage as `df` reports it: used / (used + available)
    ///
    /// Blocks reserved for root count neither as used nor as available.
    pub fn percent(&self) -> f64 {
        let base = self.usage.used_bytes.saturating_add(self.available_bytes);
        if base == 0 {
            return 0.0;
        }
        clamp_percent((self.usage.used_bytes as f64 / base as f64) * 100.0)
    }
}
