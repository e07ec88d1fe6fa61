//! The `plot(1)` command vocabulary used for box plots.
//!
//! One command per line:
//!
//! | command | text                 |
//! |---------|----------------------|
//! | move    | `m x y`              |
//! | text    | `t "\Ctext"` (centred) or `t "\Rtext"` (right-aligned) |
//! | box     | `bo x0 y0 x1 y1`     |
//! | line    | `li x0 y0 x1 y1`     |
//! | clear   | `cl`                 |
//!
//! Coordinates are fractions of the page, printed with six decimals.

use std::fmt;

use crate::core::constants::COORD_PRECISION;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    Center,
    Right,
}

impl Align {
    const fn escape(self) -> &'static str {
        match self {
            Self::Center => "\\C",
            Self::Right => "\\R",
        }
    }
}

/// One drawing action.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Move { x: f64, y: f64 },
    /// Text placed relative to the current point
    Text { align: Align, text: String },
    Box { x0: f64, y0: f64, x1: f64, y1: f64 },
    Line { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Ends the drawing sequence
    Clear,
}

/// `%f`-style coordinate: six decimals, `NaN`, `+Inf`, `-Inf`.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v == f64::INFINITY => f.write_str("+Inf"),
            v if v == f64::NEG_INFINITY => f.write_str("-Inf"),
            v => write!(f, "{v:.COORD_PRECISION$}"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { x, y } => write!(f, "m {} {}", Coord(*x), Coord(*y)),
            Command::Text { align, text } => write!(f, "t \"{}{text}\"", align.escape()),
            Command::Box { x0, y0, x1, y1 } => write!(
                f,
                "bo {} {} {} {}",
                Coord(*x0),
                Coord(*y0),
                Coord(*x1),
                Coord(*y1)
            ),
            Command::Line { x0, y0, x1, y1 } => write!(
                f,
                "li {} {} {} {}",
                Coord(*x0),
                Coord(*y0),
                Coord(*x1),
                Coord(*y1)
            ),
            Command::Clear => f.write_str("cl"),
        }
    }
}
