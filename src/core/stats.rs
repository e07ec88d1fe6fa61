//! Five-number summary using the median-of-halves convention.
//!
//! For `k` sorted values and `h = k / 2`:
//! * Q1 is the median of `s[..h]`
//! * Q3 is the median of `s[h..]`, which includes the middle element when
//!   `k` is odd.
//!
//! Other quartile methods give different boxes, so this one is not
//! interchangeable.

use std::cmp::Ordering;

/// `(min, q1, median, q3, max)` of one data set.
///
/// The default (all zero) stands in for data sets without values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Summary {
    /// Sorts `values` in place and summarises them.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_values(values: &mut [f64]) -> Option<Self> {
        values.sort_by(nan_first);
        match *values {
            [] => None,
            [v] => Some(Self {
                min: v,
                q1: v,
                median: v,
                q3: v,
                max: v,
            }),
            _ => {
                let half = values.len() / 2;
                Some(Self {
                    min: values[0],
                    q1: median(&values[..half]),
                    median: median(values),
                    q3: median(&values[half..]),
                    max: values[values.len() - 1],
                })
            }
        }
    }

    /// The five statistics in drawing order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Median of an already sorted, non-empty slice.
///
/// # Panics
/// On an empty slice.
#[inline]
#[must_use]
pub fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Ascending order with NaN below every number.
fn nan_first(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()))
}
