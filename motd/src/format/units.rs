//! Byte conversions

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Bytes to whole gibibytes, rounded to nearest
pub fn bytes_to_gib(bytes: u64) -> u64 {
    (bytes as f64 / GIB).round() as u64
}
