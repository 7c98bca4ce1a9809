//! Memory information collection

use sysinfo::System;

use crate::types::{MemorySnapshot, Usage};

/// Get RAM and swap usage from a memory-refreshed `System`
///
/// Used RAM is total minus available, so page cache and reclaimable buffers
/// count as free and the percentage matches `free -h`.
pub fn get_memory_snapshot(sys: &System) -> MemorySnapshot {
    MemorySnapshot {
        ram: Usage::new(sys.used_memory(), sys.total_memory()),
        swap: Usage::new(sys.used_swap(), sys.total_swap()),
    }
}
