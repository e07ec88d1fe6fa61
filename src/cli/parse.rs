use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "boxplot",
    about = "Box plots for plot(1) from `<name> <number>*` data sets on stdin",
    after_help = "Example:\n  echo \"linear 1 2 3 4 5 6 exponential 2 4 8 16 32 64\" | boxplot -t Title | plot"
)]
pub struct Cli {
    /// Plot title (omitted when empty)
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Emit timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
