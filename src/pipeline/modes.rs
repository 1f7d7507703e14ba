use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::config::PlotConfig;
use crate::data::{Header, ModeGrid, load_table};
use crate::error::{PlotError, Result};
use crate::pipeline::{Outcome, Pipeline, RunReport, ensure_output_dir};
use crate::render::PlotRenderer;

/// One surface per mode `1..=config.modes.count`. Absent files are skipped and a
/// failing mode never stops the ones after it.
pub fn run_modes<R: PlotRenderer + ?Sized>(config: &PlotConfig, renderer: &mut R) -> RunReport {
    info!("Generating membrane mode plots...");
    let started = Instant::now();
    let mut report = RunReport::new(Pipeline::Modes);

    for mode in 1..=config.modes.count {
        let input = config.paths.mode_input(mode);
        if !input.exists() {
            info!("File {} not found, skipping mode {mode}", input.display());
            report.push(Outcome::Skipped { mode, input });
            continue;
        }

        let out_path = config.paths.mode_output(mode);
        match plot_mode(config, renderer, mode, &input, &out_path) {
            Ok(()) => {
                info!("Generated plot for mode {mode}: {}", out_path.display());
                report.push(Outcome::Written(out_path));
            }
            // removed between the existence check and the read
            Err(PlotError::MissingFile { .. }) => {
                info!("File {} not found, skipping mode {mode}", input.display());
                report.push(Outcome::Skipped { mode, input });
            }
            Err(err) => {
                error!(mode, kind = %err.kind(), "Error plotting mode {mode}: {err}");
                report.push(Outcome::Failed {
                    target: out_path,
                    error: err,
                });
            }
        }
    }

    info!("Plot generation complete ({report}) in {:.2?}", started.elapsed());
    report
}

/// Grid and canvas live only for the duration of this call.
fn plot_mode<R: PlotRenderer + ?Sized>(
    config: &PlotConfig,
    renderer: &mut R,
    mode: usize,
    input: &Path,
    out_path: &Path,
) -> Result<()> {
    let table = load_table(input, Header::Absent)?;
    let grid = ModeGrid::from_table(&table)?;
    debug!(mode, n = grid.n(), "reshaped {} into a square grid", input.display());

    ensure_output_dir(&config.paths.plots_dir)?;
    renderer.render_mode(mode, &grid, out_path)
}
