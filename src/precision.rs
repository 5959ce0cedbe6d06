//! Precision thresholds and snapping helpers.
//!
//! Writers snap values that sit within rounding noise of a canonical value
//! (0 or 1) to exactly that value. The threshold is machine epsilon, not a
//! geometric tolerance, so small but real offsets survive.

/// Computational tolerance at machine epsilon level.
/// For low-level numerical comparisons, NOT geometric comparisons.
pub const COMPUTATIONAL: f64 = f64::EPSILON;

/// Returns exactly `1.0` if `value` is within `tolerance` of one, else `value`.
#[inline]
pub fn snap_to_unity(value: f64, tolerance: f64) -> f64 {
    if (value - 1.0).abs() < tolerance {
        1.0
    } else {
        value
    }
}

/// Returns exactly `0.0` if `|value| < tolerance`, else `value`.
#[inline]
pub fn snap_to_zero(value: f64, tolerance: f64) -> f64 {
    if value.abs() < tolerance {
        0.0
    } else {
        value
    }
}
