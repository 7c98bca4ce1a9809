//! Memory and usage types

use crate::format::{bytes_to_gib, clamp_percent};

/// Used/total pair for any byte-counted resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    /// Used bytes
    pub used_bytes: u64,
    /// Total bytes
    pub total_bytes: u64,
}

impl Usage {
    /// Pair used and total byte counts
    pub fn new(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used_bytes,
            total_bytes,
        }
    }

    /// Usage percentage (0-100); an empty resource reads as 0
    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        clamp_percent((self.used_bytes as f64 / self.total_bytes as f64) * 100.0)
    }

    /// Used space in whole GiB
    pub fn used_gib(&self) -> u64 {
        bytes_to_gib(self.used_bytes)
    }

    /// Total space in whole GiB
    pub fn total_gib(&self) -> u64 {
        bytes_to_gib(self.total_bytes)
    }
}

/// RAM and swap usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub ram: Usage,
    pub swap: Usage,
}
