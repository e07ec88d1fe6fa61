//! Horizontal placement of `n` equal boxes.
//!
//! Each box gets `1/n` of the page; a third of that share is padding, so
//! `(n + 1)` gaps and `n` boxes fill `[0, 1]` exactly:
//!
//! ```text
//! | pad | width | pad | width | pad |
//! ```

use crate::core::constants::{CAP_DIVISOR, PAD_DIVISOR};

/// Column geometry shared by every box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Columns {
    pub count: usize,
    pub pad: f64,
    pub width: f64,
    /// Half-length of a whisker cap
    pub cap: f64,
}

/// Where one box goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub left: f64,
    pub right: f64,
    pub center: f64,
}

impl Columns {
    /// `None` when there is nothing to lay out.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        let pad = (1.0 / n) / PAD_DIVISOR;
        let width = (1.0 - (n + 1.0) * pad) / n;
        Some(Self {
            count,
            pad,
            width,
            cap: width / CAP_DIVISOR,
        })
    }

    /// Slots left to right.
    ///
    /// Positions accumulate `width + pad` from the first box so output
    /// stays stable to the last decimal.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let mut x = self.pad;
        (0..self.count).map(move |_| {
            let slot = Slot {
                left: x,
                right: x + self.width,
                center: x + self.width / 2.0,
            };
            x += self.width + self.pad;
            slot
        })
    }
}
