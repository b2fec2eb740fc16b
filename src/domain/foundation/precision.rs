//! Fixed four-decimal rounding shared by every stage of the PSI pipeline.
//!
//! Each intermediate result (normalized cell, average, variation, deviation,
//! weight, PSI value) is rounded as soon as it is produced, so later stages
//! consume the rounded values rather than the exact ones.

/// Number of fractional digits kept at every stage.
pub const DECIMAL_PLACES: u32 = 4;

const SCALE: f64 = 10_000.0;

/// Rounds to four fractional digits, halves away from zero.
///
/// Negative zero collapses to `0.0` so that equal results stay bit-identical.
pub fn round4(value: f64) -> f64 {
    let rounded = (value * SCALE).round() / SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats a value with exactly four fractional digits.
pub fn format4(value: f64) -> String {
    format!("{:.*}", DECIMAL_PLACES as usize, value)
}
