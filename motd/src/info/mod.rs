//! Host information collection
//!
//! [`HostProbe`] is the boundary to the running machine; [`LiveHost`] backs
//! it with `sysinfo` and `statvfs(3)`. The OS release file is read separately through
//! [`os::read_pretty_name`] since its path comes from configuration.

pub mod disk;
pub mod memory;
pub mod os;
pub mod uptime;

use std::path::Path;
use std::time::Duration;

use sysinfo::System;
use tracing::debug;

use crate::config::MotdConfig;
use crate::error::MotdResult;
use crate::types::{KernelInfo, LoadAverage, MemorySnapshot, StorageSnapshot, SystemSnapshot};

/// Source of live host state
pub trait HostProbe {
    /// Time elapsed since boot
    fn uptime(&self) -> Duration;

    /// Kernel name and release
    fn kernel(&self) -> KernelInfo;

    /// 1/5/15 minute load averages
    fn load_average(&self) -> LoadAverage;

    /// RAM and swap usage
    fn memory(&self) -> MemorySnapshot;

    /// Usage of the filesystem mounted at `mount_point`
    fn storage(&self, mount_point: &Path) -> StorageSnapshot;
}

/// [`HostProbe`] over the machine this process runs on
pub struct LiveHost {
    system: System,
}

impl LiveHost {
    /// Probe with memory figures refreshed once at construction
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        Self { system }
    }
}

impl Default for LiveHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for LiveHost {
    fn uptime(&self) -> Duration {
        uptime::since_boot(System::boot_time())
    }

    fn kernel(&self) -> KernelInfo {
        os::get_kernel_info()
    }

    fn load_average(&self) -> LoadAverage {
        let load = System::load_average();
        LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        }
    }

    fn memory(&self) -> MemorySnapshot {
        memory::get_memory_snapshot(&self.system)
    }

    fn storage(&self, mount_point: &Path) -> StorageSnapshot {
        disk::get_storage_snapshot(mount_point)
    }
}

/// Collect everything the system section shows
///
/// Fails only when the OS release file cannot be read.
pub fn get_system_snapshot(
    probe: &impl HostProbe,
    config: &MotdConfig,
) -> MotdResult<SystemSnapshot> {
    let os_name = os::read_pretty_name(&config.os_release_path)?;
    debug!(os_name = %os_name, "read OS release");

    Ok(SystemSnapshot {
        uptime: probe.uptime(),
        os_name,
        kernel: probe.kernel(),
        load: probe.load_average(),
    })
}
