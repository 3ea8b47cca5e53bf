//! Numeric helpers for stride and window statistics.

/// Converts a stride ratio into a pixel step for a window dimension.
///
/// The step is `round(ratio * dim)` clamped to `[1, dim]`. Negative, zero and
/// NaN ratios yield 1; oversized ratios yield `dim`. `dim` must be non-zero.
pub(crate) fn pixel_stride(ratio: f32, dim: usize) -> usize {
    let raw = (ratio * dim as f32).round();
    // Float-to-int `as` saturates: NaN and negatives become 0.
    let step = raw as usize;
    step.clamp(1, dim.max(1))
}

/// Number of grid positions in `[0, span]` visited with the given step.
pub(crate) fn steps_in_span(span: usize, step: usize) -> usize {
    span / step + 1
}

/// Variance-like second moment `sum_sq - sum^2 / n` of a pixel window.
pub(crate) fn centered_sum_sq(sum: f64, sum_sq: f64, count: f64) -> f64 {
    sum_sq - (sum * sum) / count
}
