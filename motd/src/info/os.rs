//! OS and kernel information collection

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sysinfo::System;

use crate::error::{MotdError, MotdResult};
use crate::types::KernelInfo;

/// Placeholder for values the host does not report
pub const UNKNOWN: &str = "Unknown";

const PRETTY_NAME_KEY: &str = "PRETTY_NAME=";

/// Read `PRETTY_NAME` from an os-release style file
///
/// Returns "Unknown" when the key is missing. Failing to open or read the
/// file is an error.
pub fn read_pretty_name(path: &Path) -> MotdResult<String> {
    let to_error = |source: std::io::Error| MotdError::OsRelease {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(to_error)?);
    for line in reader.lines() {
        let line = line.map_err(to_error)?;
        if let Some(value) = line.strip_prefix(PRETTY_NAME_KEY) {
            return Ok(value.trim().trim_matches('"').to_string());
        }
    }

    Ok(UNKNOWN.to_string())
}

/// Get kernel name and release of the running host
pub fn get_kernel_info() -> KernelInfo {
    KernelInfo {
        name: kernel_name(std::env::consts::OS),
        release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

/// Map a Rust target OS to the name `uname -s` reports
fn kernel_name(target_os: &str) -> String {
    match target_os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "windows" => "Windows".to_string(),
        other => other.to_string(),
    }
}
