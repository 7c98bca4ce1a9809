//! Storage section

use super::memory::usage_label;
use super::INDENT;
use crate::format::{headline, progress_bar};
use crate::types::StorageSnapshot;

/// One wide headline and bar for the reported filesystem
pub fn storage_section(storage: &StorageSnapshot, width: usize) -> String {
    let mount = storage.mount_point.display().to_string();
    let head = headline(&mount, &usage_label(&storage.usage), width);
    let bar = progress_bar(storage.percent(), width);

    format!("\nStorage:\n{INDENT}{head}\n{INDENT}{bar}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STORAGE_WIDTH;
    use crate::format::{strip_ansi, visible_width};
    use crate::types::Usage;
    use std::path::PathBuf;

    #[test]
    fn test_storage_section() {
        let storage = StorageSnapshot {
            mount_point: PathBuf::from("/"),
            usage: Usage::new(25 * 1_073_741_824, 100 * 1_073_741_824),
            available_bytes: 75 * 1_073_741_824,
        };

        let section = storage_section(&storage, STORAGE_WIDTH);
        let lines: Vec<&str> = section.lines().collect();
        assert_eq!(lines[1], "Storage:");
        assert_eq!(visible_width(lines[2]), 2 + STORAGE_WIDTH);
        assert!(strip_ansi(lines[2]).starts_with("  /  "));
        assert!(strip_ansi(lines[2]).ends_with(" 25 GiB / 100 GiB"));
        assert!(strip_ansi(lines[3]).ends_with("] 25%"));
    }
}
