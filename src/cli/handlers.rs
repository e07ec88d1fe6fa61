use std::{
    io::{stdin, stdout},
    time::Instant,
};

use crate::{
    core::{config::Config, data::read_boxes, error::PlotError},
    render::Renderer,
};

use super::parse::Cli;

/// stdin → data sets → `plot(1)` commands on stdout.
///
/// Nothing is written if reading fails.
pub fn plot(a: &Cli) -> Result<(), PlotError> {
    let cfg = Config::builder().title(a.title.as_str()).build()?;

    let t_ingest = Instant::now();
    let boxes = read_boxes(stdin().lock())?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_render = Instant::now();
    Renderer::new(stdout().lock()).render(&cfg, &boxes)?;
    let dur_render = t_render.elapsed().as_micros();

    if a.debug {
        let values: usize = boxes.iter().map(|b| b.values.len()).sum();
        eprintln!(
            "ingest: {dur_ingest} µs   ({} data sets, {values} values)\nrender: {dur_render} µs",
            boxes.len()
        );
    }
    Ok(())
}
