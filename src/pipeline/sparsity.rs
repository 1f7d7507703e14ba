use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::config::PlotConfig;
use crate::data::{Header, SparsityPattern, load_table};
use crate::error::Result;
use crate::pipeline::{Outcome, Pipeline, RunReport, ensure_output_dir};
use crate::render::PlotRenderer;

pub fn run_sparsity<R: PlotRenderer + ?Sized>(config: &PlotConfig, renderer: &mut R) -> RunReport {
    info!("Generating matrix sparsity plot...");
    let started = Instant::now();
    let mut report = RunReport::new(Pipeline::Sparsity);
    let out_path = config.paths.sparsity_output();

    match plot_sparsity(config, renderer, &out_path) {
        Ok(()) => {
            info!(
                "Sparsity plot saved to {} in {:.2?}",
                out_path.display(),
                started.elapsed()
            );
            report.push(Outcome::Written(out_path));
        }
        Err(err) => {
            error!(kind = %err.kind(), "Error generating sparsity plot: {err}");
            report.push(Outcome::Failed {
                target: out_path,
                error: err,
            });
        }
    }
    report
}

fn plot_sparsity<R: PlotRenderer + ?Sized>(
    config: &PlotConfig,
    renderer: &mut R,
    out_path: &Path,
) -> Result<()> {
    let input = config.paths.sparsity_input();
    let table = load_table(&input, Header::Skip)?;
    let pattern = SparsityPattern::from_table(&table, config.sparsity.dims)?;
    let dims = pattern.dims();
    debug!(
        nnz = pattern.nnz(),
        rows = dims.rows,
        cols = dims.cols,
        "sparsity {:.4}%",
        pattern.sparsity_percent()
    );

    ensure_output_dir(&config.paths.plots_dir)?;
    renderer.render_sparsity(&pattern, out_path)
}
