use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = boxplot::cli::run() {
        eprintln!("boxplot: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
