// Entry point: runs one or all plotting pipelines over the solver output.
use std::process::ExitCode;

use clap::Parser;
use membrane_plots::app;
use membrane_plots::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    app::run(&args)
}
