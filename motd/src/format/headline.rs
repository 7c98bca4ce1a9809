//! Left/right aligned headlines

use super::ansi::visible_width;

/// Default visible width of a headline
pub const HEADLINE_WIDTH: usize = 26;

/// Place `left` and `right` on one line, `width` visible characters wide
///
/// Both sides may carry color codes; only their visible characters count.
/// When the two sides together are wider than `width` they are joined
/// without padding rather than truncated.
pub fn headline(left: &str, right: &str, width: usize) -> String {
    let used = visible_width(left) + visible_width(right);
    let padding = width.saturating_sub(used);

    format!("{left}{}{right}", " ".repeat(padding))
}
