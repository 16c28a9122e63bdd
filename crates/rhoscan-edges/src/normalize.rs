//! Global min-max normalization onto `[0, 255]` and threshold cut-off.
//!
//! A raw range counts as degenerate when `max - min` is no wider than
//! [`MAGNITUDE_SLACK`] times the density scale (the largest absolute
//! density the sweep read). Spans that narrow are rounding residue from
//! the stencil sums, not gradients, and map to an all-zero field.

/// Upper end of the normalized scale.
pub const SCALE_MAX: f64 = 255.0;

/// Relative rounding slack of one L1 Sobel magnitude against the density
/// scale. Covers three 27-tap sums with weights up to 6.
pub const MAGNITUDE_SLACK: f64 = 1024.0 * f64::EPSILON;

/// Largest absolute value in `values`, 0 if empty.
pub fn density_scale(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// Whether `(min, max)` is too narrow to normalize against `scale`.
pub fn is_degenerate((min, max): (f64, f64), scale: f64) -> bool {
    max - min <= MAGNITUDE_SLACK * scale
}

/// Minimum and maximum of `values`, or `None` if empty.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Remap `values` in place as `255 * (v - min) / (max - min)`.
///
/// A degenerate range (see [`is_degenerate`]) maps every value to 0. A
/// `scale` of 0 makes only `max == min` degenerate. Returns whether the
/// range was degenerate.
pub fn normalize(values: &mut [f64], (min, max): (f64, f64), scale: f64) -> bool {
    if is_degenerate((min, max), scale) {
        values.fill(0.0);
        return true;
    }
    let span = max - min;
    for v in values.iter_mut() {
        *v = SCALE_MAX * ((*v - min) / span);
    }
    false
}

/// Zero every value strictly below `threshold`. Returns how many were zeroed.
pub fn apply_threshold(values: &mut [f64], threshold: u8) -> usize {
    let cut = f64::from(threshold);
    let mut zeroed = 0;
    for v in values.iter_mut().filter(|v| **v < cut) {
        if *v != 0.0 {
            zeroed += 1;
        }
        *v = 0.0;
    }
    zeroed
}
