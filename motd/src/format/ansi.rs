//! ANSI escape handling

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Bright green foreground
pub const GREEN: &str = "\x1b[92m";
/// Bright black (dim gray) foreground
pub const DIM: &str = "\x1b[90m";
/// Reset all attributes
pub const RESET: &str = "\x1b[0m";

/// ESC followed by a single Fe byte (`@`-`Z`, `\`, `^`, `_`) or by a CSI
/// sequence: `[`, parameter bytes `0`-`?`, intermediate bytes ` `-`/` and
/// one final byte `@`-`~`.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\^_]|\[[0-?]*[ -/]*[@-~])").expect("Invalid ANSI escape regex")
});

/// Remove every escape sequence from `text`
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Number of characters a terminal would show for `text`
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Wrap `text` in the report's highlight color
pub fn colorize(text: impl std::fmt::Display) -> String {
    format!("{GREEN}{text}{RESET}")
}
