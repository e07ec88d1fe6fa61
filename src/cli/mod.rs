mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();
    handlers::plot(&cli)
}
