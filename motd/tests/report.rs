//! End-to-end report generation against a fake host
//!
//! The OS release file is a temp file and the ingress query is a `sh -c`
//! script, so these tests need nothing beyond a POSIX shell.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use motd::format::{colorize, strip_ansi};
use motd::kube::IngressCommand;
use motd::types::{KernelInfo, LoadAverage, MemorySnapshot, StorageSnapshot, Usage};
use motd::{generate_motd, HostProbe, MotdConfig, MotdError};

const GIB: u64 = 1_073_741_824;

struct FakeHost {
    memory: MemorySnapshot,
    disk: Usage,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            memory: MemorySnapshot {
                ram: Usage::new(1_610_612_736, 8 * GIB),
                swap: Usage::new(GIB, 4 * GIB),
            },
            disk: Usage::new(40 * GIB, 100 * GIB),
        }
    }
}

impl HostProbe for FakeHost {
    fn uptime(&self) -> Duration {
        Duration::from_secs(3 * 86400 + 4 * 3600 + 5 * 60 + 6)
    }

    fn kernel(&self) -> KernelInfo {
        KernelInfo {
            name: "Linux".to_string(),
            release: "6.1.0-test".to_string(),
        }
    }

    fn load_average(&self) -> LoadAverage {
        LoadAverage {
            one: 0.5,
            five: 0.3,
            fifteen: 0.1,
        }
    }

    fn memory(&self) -> MemorySnapshot {
        self.memory
    }

    fn storage(&self, mount_point: &Path) -> StorageSnapshot {
        StorageSnapshot {
            mount_point: mount_point.to_path_buf(),
            usage: self.disk,
            available_bytes: self.disk.total_bytes - self.disk.used_bytes,
        }
    }
}

fn os_release(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn config(os_release: &Path, ingress_script: &str) -> MotdConfig {
    MotdConfig {
        os_release_path: os_release.to_path_buf(),
        ingress: IngressCommand::new("sh", &["-c", ingress_script]),
        ..MotdConfig::default()
    }
}

#[tokio::test]
async fn test_full_report() {
    let release = os_release("NAME=Test\nPRETTY_NAME=\"Test OS\"\n");
    let config = config(release.path(), "echo b.example.com a.example.com b.example.com");

    let report = generate_motd(&FakeHost::new(), &config).await.unwrap();
    let plain = strip_ansi(&report);

    assert!(report.contains("Test OS"));
    assert!(report.contains(&format!("{} GiB / 8 GiB", colorize(2))));
    assert!(report.contains(&colorize("0.50")));

    assert!(plain.contains("(\\(\\         /)/)"));
    assert!(plain.contains("  Uptime...: 3 days, 4:05:06\n"));
    assert!(plain.contains("  Kernel...: Linux 6.1.0-test\n"));
    assert!(plain.contains("  Load.....: 0.50 (1 min), 0.30 (5 min), 0.10 (15 min)\n"));
    // 1.5 GiB of 8 GiB RAM, 1 of 4 GiB swap
    assert!(plain.contains("  RAM          2 GiB / 8 GiB   Swap         1 GiB / 4 GiB\n"));
    assert!(plain.contains("  [====================] 19%   [====================] 25%\n"));
    assert!(plain.contains("40 GiB / 100 GiB\n"));
    assert!(plain.contains("] 40%"));
    assert!(plain.contains("\nActive Ingresses:\n  a.example.com\n  b.example.com\n"));
}

#[tokio::test]
async fn test_section_order() {
    let release = os_release("PRETTY_NAME=\"Test OS\"\n");
    let report = generate_motd(&FakeHost::new(), &config(release.path(), "true"))
        .await
        .unwrap();

    let positions: Vec<usize> = ["(-.-)", "System info:", "Memory:", "Storage:", "Active Ingresses:"]
        .iter()
        .map(|title| report.find(title).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn test_missing_pretty_name_is_unknown() {
    let release = os_release("NAME=Test\nID=test\n");
    let report = generate_motd(&FakeHost::new(), &config(release.path(), "true"))
        .await
        .unwrap();

    assert!(report.contains("  Distro...: Unknown\n"));
}

#[tokio::test]
async fn test_failing_ingress_query_lists_nothing() {
    let release = os_release("PRETTY_NAME=\"Test OS\"\n");
    let config = config(release.path(), "echo should-not-show.com; exit 1");

    let report = generate_motd(&FakeHost::new(), &config).await.unwrap();

    assert!(!report.contains("should-not-show.com"));
    assert!(report.contains("\nActive Ingresses:\n  \n"));
}

#[tokio::test]
async fn test_out_of_range_usage_is_clamped() {
    let release = os_release("PRETTY_NAME=\"Test OS\"\n");
    let mut host = FakeHost::new();
    host.memory.swap = Usage::new(6 * GIB, 4 * GIB);

    let report = generate_motd(&host, &config(release.path(), "true")).await.unwrap();

    assert!(strip_ansi(&report).contains("] 100%"));
}

#[tokio::test]
async fn test_missing_os_release_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir.path().join("os-release"), "true");

    let err = generate_motd(&FakeHost::new(), &config).await.unwrap_err();
    assert!(matches!(err, MotdError::OsRelease { .. }));
}
