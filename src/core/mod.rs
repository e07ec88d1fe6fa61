//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod stats;

// re-export frequently-used items for convenience
pub use bounds::{LinearMap, value_bounds};
pub use config::{Config, ConfigBuilder};
pub use constants::{COORD_PRECISION, LABEL_SIG_DIGITS, Y_PAD, Y_TEXT};
pub use data::{Dataset, TokenReader, read_boxes, read_boxes_from};
pub use error::{ConfigError, PlotError, ReadError};
pub use stats::{Summary, median};
