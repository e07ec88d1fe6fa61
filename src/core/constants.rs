//! A collection of constants.
//!
//! All geometry lives in the normalised `[0, 1] × [0, 1]` space of `plot(1)`,
//! y growing upwards.

/// Blank space above the plot and below the name row
pub const Y_PAD: f64 = 0.05;
/// Height of one text row (box names at the bottom, title at the top)
pub const Y_TEXT: f64 = 0.02;

/// Horizontal padding is a third of the space each box gets
pub const PAD_DIVISOR: f64 = 3.0;
/// Whisker caps reach a quarter of the box width to each side of the centre
pub const CAP_DIVISOR: f64 = 4.0;

/// Data labels carry three significant digits.
///
/// 14.832 becomes 14.8, 1483.2 becomes 1.48e+03
pub const LABEL_SIG_DIGITS: usize = 3;
/// Coordinates are printed with six decimals.
pub const COORD_PRECISION: usize = 6;

/// Read buffer for stdin
pub const BUF_CAP: usize = 1 << 20; // 1 MiB
