//! System info section

use super::INDENT;
use crate::format::colorize;
use crate::info::uptime::format_uptime;
use crate::types::SystemSnapshot;

/// Uptime, distro, kernel and load averages
pub fn system_section(system: &SystemSnapshot) -> String {
    let load = system.load;

    format!(
        "\nSystem info:\n\
         {INDENT}Uptime...: {}\n\
         {INDENT}Distro...: {}\n\
         {INDENT}Kernel...: {} {}\n\
         {INDENT}Load.....: {} (1 min), {} (5 min), {} (15 min)\n",
        format_uptime(system.uptime),
        system.os_name,
        system.kernel.name,
        system.kernel.release,
        colorize(format!("{:.2}", load.one)),
        colorize(format!("{:.2}", load.five)),
        colorize(format!("{:.2}", load.fifteen)),
    )
}
