//! Geometry helpers: shared value range + the value → y transform.

use crate::core::data::Dataset;

/// Inclusive value range covered by every box, without any padding.
///
/// * Data sets without values count with their zero summary.
/// * If there are no data sets or the extrema are non-finite the fallback
///   is `(0.0, 1.0)`.
/// * If the range is a single point we expand by +-0.5 so every value lands
///   in the middle of the plot instead of dividing by zero. Any non-zero
///   spread, however small, is kept as is.
#[must_use]
pub fn value_bounds(boxes: &[Dataset]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for b in boxes {
        low = low.min(b.summary.min);
        high = high.max(b.summary.max);
    }

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }

    // Degenerate (flat-line) data - give it some breathing room.
    if high - low == 0.0 {
        return (low - 0.5, high + 0.5);
    }

    (low, high)
}

/// Linear map taking `[from.0, from.1]` onto `[to.0, to.1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    from_lo: f64,
    from_span: f64,
    to_lo: f64,
    to_span: f64,
}

impl LinearMap {
    #[must_use]
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            from_lo: from.0,
            from_span: from.1 - from.0,
            to_lo: to.0,
            to_span: to.1 - to.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn apply(&self, v: f64) -> f64 {
        ((v - self.from_lo) / self.from_span) * self.to_span + self.to_lo
    }
}
