//! Top-level drivers shared by the binaries.

use std::process::ExitCode;

use tracing::info;

use crate::cli::Args;
use crate::config::PlotConfig;
use crate::logging;
use crate::pipeline::{Pipeline, RunReport};
use crate::render::PlottersRenderer;

/// Runs the pipelines selected on the command line. Fails the process only when
/// some artifact failed; skipped modes are not failures.
pub fn run(args: &Args) -> ExitCode {
    init_logging();
    let config = args.resolve_config();
    let mut renderer = PlottersRenderer::new(&config);

    let reports: Vec<RunReport> = args
        .target
        .pipelines()
        .into_iter()
        .map(|pipeline| pipeline.run(&config, &mut renderer))
        .collect();

    for report in &reports {
        info!("{report}");
    }
    if reports.iter().any(RunReport::has_failures) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Argument-free entry point: default paths, 300 dpi, always exits normally.
pub fn run_standalone(pipeline: Pipeline) -> RunReport {
    init_logging();
    let config = PlotConfig::default();
    let mut renderer = PlottersRenderer::new(&config);
    pipeline.run(&config, &mut renderer)
}

fn init_logging() {
    if let Err(err) = logging::init_tracing() {
        eprintln!("{err}");
    }
}
