//! Text primitives for the report
//!
//! Everything here is pure: width measurement that ignores ANSI escapes,
//! colorizing, left/right headlines, usage bars and byte conversion.

pub mod ansi;
pub mod bar;
pub mod headline;
pub mod units;

pub use ansi::{colorize, strip_ansi, visible_width};
pub use bar::{clamp_percent, progress_bar, BAR_WIDTH};
pub use headline::{headline, HEADLINE_WIDTH};
pub use units::bytes_to_gib;
