//! Report configuration
//!
//! The binary takes no flags and reads no config file; every knob lives here
//! with its default so library callers and tests can override it.

use std::path::PathBuf;

use crate::format::HEADLINE_WIDTH;
use crate::kube::IngressCommand;

/// Default location of the OS release metadata
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Width of the storage headline and bar, wider since only one bar is shown
pub const STORAGE_WIDTH: usize = 55;

/// Everything a single report run depends on
#[derive(Debug, Clone)]
pub struct MotdConfig {
    /// Key=value file consulted for `PRETTY_NAME`
    pub os_release_path: PathBuf,
    /// Filesystem reported in the storage section
    pub storage_mount: PathBuf,
    /// Width of the RAM/Swap headlines and bars
    pub headline_width: usize,
    /// Width of the storage headline and bar
    pub storage_width: usize,
    /// Command listing ingress hostnames
    pub ingress: IngressCommand,
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
            storage_mount: PathBuf::from("/"),
            headline_width: HEADLINE_WIDTH,
            storage_width: STORAGE_WIDTH,
            ingress: IngressCommand::default(),
        }
    }
}
