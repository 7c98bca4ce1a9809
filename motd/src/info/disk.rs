//! Disk information collection
//!
//! Usage comes straight from `statvfs(3)` so the numbers line up with `df`:
//! used is total minus free blocks, and blocks reserved for root are left
//! out of the percentage.

use std::io;
use std::path::Path;

use tracing::warn;

use crate::types::{StorageSnapshot, Usage};

/// Block counts of one filesystem, in units of `fragment_size` bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsStats {
    pub fragment_size: u64,
    pub blocks: u64,
    /// Free blocks, including those reserved for root
    pub blocks_free: u64,
    /// Free blocks an unprivileged user may allocate
    pub blocks_available: u64,
}

impl FsStats {
    /// Convert block counts into a snapshot for `mount_point`
    pub fn to_snapshot(&self, mount_point: &Path) -> StorageSnapshot {
        let total = self.blocks.saturating_mul(self.fragment_size);
        let used = self
            .blocks
            .saturating_sub(self.blocks_free)
            .saturating_mul(self.fragment_size);

        StorageSnapshot {
            mount_point: mount_point.to_path_buf(),
            usage: Usage::new(used, total),
            available_bytes: self.blocks_available.saturating_mul(self.fragment_size),
        }
    }
}

/// Get usage of the filesystem holding `mount_point`
///
/// A path that cannot be queried yields zero usage.
pub fn get_storage_snapshot(mount_point: &Path) -> StorageSnapshot {
    match statvfs(mount_point) {
        Ok(stats) => stats.to_snapshot(mount_point),
        Err(e) => {
            warn!(mount_point = %mount_point.display(), error = %e, "statvfs failed, reporting zero usage");
            StorageSnapshot {
                mount_point: mount_point.to_path_buf(),
                usage: Usage::default(),
                available_bytes: 0,
            }
        }
    }
}

/// Query filesystem block counts for `path`
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)] // field widths differ between platforms
pub fn statvfs(path: &Path) -> io::Result<FsStats> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: c_path is NUL-terminated and outlives the call; stat points to
    // writable memory sized for a statvfs struct.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: statvfs returned 0, so it filled the struct.
    let stat = unsafe { stat.assume_init() };

    Ok(FsStats {
        fragment_size: stat.f_frsize as u64,
        blocks: stat.f_blocks as u64,
        blocks_free: stat.f_bfree as u64,
        blocks_available: stat.f_bavail as u64,
    })
}

#[cfg(not(unix))]
pub fn statvfs(_path: &Path) -> io::Result<FsStats> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "statvfs is only available on unix",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1_073_741_824;

    #[test]
    fn test_used_is_total_minus_free() {
        // 100 GiB in 4 KiB blocks: 20 GiB free, of which 5 GiB reserved for root
        let block = 4096;
        let stats = FsStats {
            fragment_size: block,
            blocks: 100 * GIB / block,
            blocks_free: 20 * GIB / block,
            blocks_available: 15 * GIB / block,
        };

        let snapshot = stats.to_snapshot(Path::new("/"));
        assert_eq!(snapshot.usage.total_bytes, 100 * GIB);
        assert_eq!(snapshot.usage.used_bytes, 80 * GIB);
        assert_eq!(snapshot.available_bytes, 15 * GIB);
        assert_eq!(snapshot.usage.used_gib(), 80);
        assert_eq!(snapshot.percent(), 80.0 / 95.0 * 100.0);
    }

    #[test]
    fn test_free_above_total_saturates() {
        let stats = FsStats {
            fragment_size: 512,
            blocks: 10,
            blocks_free: 12,
            blocks_available: 12,
        };
        let snapshot = stats.to_snapshot(Path::new("/"));
        assert_eq!(snapshot.usage.used_bytes, 0);
        assert_eq!(snapshot.percent(), 0.0);
    }

    #[cfg(unix)]
    #[test]
    fn test_root_filesystem() {
        let snapshot = get_storage_snapshot(Path::new("/"));
        assert!(snapshot.usage.total_bytes > 0);
        assert!(snapshot.usage.used_bytes <= snapshot.usage.total_bytes);
        assert!(snapshot.available_bytes <= snapshot.usage.total_bytes);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = get_storage_snapshot(&dir.path().join("absent"));
        assert_eq!(snapshot.usage, Usage::default());
        assert_eq!(snapshot.available_bytes, 0);
        assert_eq!(snapshot.percent(), 0.0);
    }
}
