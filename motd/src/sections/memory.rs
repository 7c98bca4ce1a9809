//! Memory section

use super::INDENT;
use crate::format::{colorize, headline, progress_bar};
use crate::types::{MemorySnapshot, Usage};

/// Gap between the RAM and Swap columns
const COLUMN_GAP: &str = "   ";

/// `<used> GiB / <total> GiB` with the used figure highlighted
pub(crate) fn usage_label(usage: &Usage) -> String {
    format!("{} GiB / {} GiB", colorize(usage.used_gib()), usage.total_gib())
}

/// RAM and Swap headlines with their bars side by side
pub fn memory_section(memory: &MemorySnapshot, width: usize) -> String {
    let ram_head = headline("RAM", &usage_label(&memory.ram), width);
    let swap_head = headline("Swap", &usage_label(&memory.swap), width);
    let ram_bar = progress_bar(memory.ram.percent(), width);
    let swap_bar = progress_bar(memory.swap.percent(), width);

    format!(
        "\nMemory:\n\
         {INDENT}{ram_head}{COLUMN_GAP}{swap_head}\n\
         {INDENT}{ram_bar}{COLUMN_GAP}{swap_bar}\n"
    )
}
