//! Usage bars
//!
//! A bar looks like `[==========----------] 50%` where the filled run is
//! bright green and the rest dim, both drawn with `=`.

use super::ansi::{visible_width, DIM, GREEN, RESET};

/// Default visible width of a bar, label included
pub const BAR_WIDTH: usize = 26;

/// Columns reserved around the bar interior for brackets, spacing and label
const RESERVED: usize = 6;

/// Clamp to [0, 100]; NaN reads as 0
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Render `percent` as a bar `width` columns wide
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = clamp_percent(percent);
    let interior = width.saturating_sub(RESERVED);

    let filled = ((interior as f64 * percent / 100.0).round() as usize).min(interior);
    let unfilled = interior - filled;

    let bar = format!(
        "[{GREEN}{}{RESET}{DIM}{}{RESET}]",
        "=".repeat(filled),
        "=".repeat(unfilled)
    );
    let space = if percent < 10.0 { "  " } else { " " };
    let rendered = format!("{bar}{space}{percent:.0}%");

    let padding = (interior + 4).saturating_sub(visible_width(&rendered));
    format!("{rendered}{}", " ".repeat(padding))
}
