//! Uptime computation and formatting

use std::time::Duration;

use chrono::Utc;

/// Time elapsed between `boot_time_unix` and now, never negative
pub fn since_boot(boot_time_unix: u64) -> Duration {
    let elapsed = Utc::now().timestamp() - boot_time_unix as i64;
    Duration::from_secs(elapsed.max(0) as u64)
}

/// Format an uptime as `H:MM:SS`, prefixed by the day count once past a day
///
/// Examples: `0:00:42`, `5:07:09`, `1 day, 0:00:00`, `12 days, 3:04:05`.
pub fn format_uptime(uptime: Duration) -> String {
    let seconds = uptime.as_secs();
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, secs);
    if days > 0 {
        format!("{} day{}, {}", days, if days == 1 { "" } else { "s" }, clock)
    } else {
        clock
    }
}
