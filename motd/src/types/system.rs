//! System information types

use std::time::Duration;

/// Kernel identity, as `uname -s` / `uname -r` would print it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelInfo {
    /// Kernel name (e.g., "Linux")
    pub name: String,
    /// Kernel release (e.g., "6.8.0-45-generic")
    pub release: String,
}

/// 1, 5 and 15 minute load averages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Everything shown in the system section
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    /// Time since boot
    pub uptime: Duration,
    /// `PRETTY_NAME` from the OS release file, or "Unknown"
    pub os_name: String,
    pub kernel: KernelInfo,
    pub load: LoadAverage,
}
