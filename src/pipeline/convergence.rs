use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::config::PlotConfig;
use crate::data::{ConvergenceTable, Header, load_table};
use crate::error::Result;
use crate::pipeline::{Outcome, Pipeline, RunReport, ensure_output_dir};
use crate::render::PlotRenderer;

/// Eigenvalue-vs-grid-size figure. Every failure is logged and recorded; none
/// escapes.
pub fn run_convergence<R: PlotRenderer + ?Sized>(
    config: &PlotConfig,
    renderer: &mut R,
) -> RunReport {
    info!("Generating convergence plot...");
    let started = Instant::now();
    let mut report = RunReport::new(Pipeline::Convergence);
    let out_path = config.paths.convergence_output();

    match plot_convergence(config, renderer, &out_path) {
        Ok(()) => {
            info!(
                "Convergence plot saved to {} in {:.2?}",
                out_path.display(),
                started.elapsed()
            );
            report.push(Outcome::Written(out_path));
        }
        Err(err) => {
            error!(kind = %err.kind(), "Error generating convergence plot: {err}");
            report.push(Outcome::Failed {
                target: out_path,
                error: err,
            });
        }
    }
    report
}

fn plot_convergence<R: PlotRenderer + ?Sized>(
    config: &PlotConfig,
    renderer: &mut R,
    out_path: &Path,
) -> Result<()> {
    let input = config.paths.convergence_input();
    let table = load_table(&input, Header::Skip)?;
    let convergence = ConvergenceTable::from_table(&table)?;
    debug!(
        rows = convergence.rows(),
        "loaded convergence table from {}",
        input.display()
    );

    ensure_output_dir(&config.paths.plots_dir)?;
    renderer.render_convergence(&convergence, out_path)
}
