//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    data::{Dataset, TokenReader, read_boxes, read_boxes_from},
    error::{ConfigError, PlotError, ReadError},
    stats::{Summary, median},
};

pub use render::{Command, Renderer, draw_commands, format_sig};

/// Convenience function: read every data set from `input` and write the box
/// plots, titled `title` (empty for none), to `output`.
///
/// Nothing is written when reading fails.
pub fn plot_boxes<R, W>(input: R, title: &str, output: W) -> Result<(), PlotError>
where
    R: std::io::Read,
    W: std::io::Write,
{
    let cfg = Config::builder().title(title).build()?;
    let boxes = read_boxes_from(input)?;
    Renderer::new(output).render(&cfg, &boxes)
}
