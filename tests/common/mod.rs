#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use membrane_plots::PlotConfig;
use membrane_plots::data::{ConvergenceTable, ModeGrid, SparsityPattern};
use membrane_plots::error::{PlotError, Result};
use membrane_plots::render::PlotRenderer;

/// Stands in for the plotters renderer: writes a small marker file per figure
/// and remembers what it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub convergence_rows: Vec<usize>,
    pub mode_grids: Vec<(usize, usize)>,
    pub sparsity: Vec<(usize, f64)>,
    /// Modes whose render call should fail.
    pub fail_modes: Vec<usize>,
}

impl RecordingRenderer {
    fn write_marker(out_path: &Path) -> Result<()> {
        fs::write(out_path, b"\x89PNG").map_err(|e| PlotError::Render {
            path: out_path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl PlotRenderer for RecordingRenderer {
    fn render_convergence(&mut self, table: &ConvergenceTable, out_path: &Path) -> Result<()> {
        self.convergence_rows.push(table.rows());
        Self::write_marker(out_path)
    }

    fn render_mode(&mut self, mode: usize, grid: &ModeGrid, out_path: &Path) -> Result<()> {
        if self.fail_modes.contains(&mode) {
            return Err(PlotError::Render {
                path: out_path.to_path_buf(),
                reason: "simulated backend failure".into(),
            });
        }
        self.mode_grids.push((mode, grid.n()));
        Self::write_marker(out_path)
    }

    fn render_sparsity(&mut self, pattern: &SparsityPattern, out_path: &Path) -> Result<()> {
        self.sparsity
            .push((pattern.nnz(), pattern.sparsity_percent()));
        Self::write_marker(out_path)
    }
}

/// Config rooted in a scratch directory with `data/` already created.
pub fn scratch_config(root: &Path) -> PlotConfig {
    let mut config = PlotConfig::default();
    config.paths.data_dir = root.join("data");
    config.paths.plots_dir = root.join("plots");
    fs::create_dir_all(&config.paths.data_dir).unwrap();
    config
}

pub fn write_convergence_csv(config: &PlotConfig, rows: &[&[f64]]) -> PathBuf {
    let mut text = String::from("grid_size,eig1,eig2,eig3,eig4,eig5\n");
    for row in rows {
        let cols: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&cols.join(","));
        text.push('\n');
    }
    let path = config.paths.convergence_input();
    fs::write(&path, text).unwrap();
    path
}

/// Row-major `n × n` grid on the unit square with a separable sine amplitude.
pub fn write_mode_csv(config: &PlotConfig, mode: usize, n: usize) -> PathBuf {
    let mut text = String::new();
    for i in 0..n {
        for j in 0..n {
            let x = j as f64 / (n - 1).max(1) as f64;
            let y = i as f64 / (n - 1).max(1) as f64;
            let amp = (std::f64::consts::PI * x * mode as f64).sin()
                * (std::f64::consts::PI * y).sin();
            text.push_str(&format!("{x:.6},{y:.6},{amp:.6}\n"));
        }
    }
    let path = config.paths.mode_input(mode);
    fs::write(&path, text).unwrap();
    path
}

pub fn write_pattern_csv(config: &PlotConfig, entries: &[(usize, usize)]) -> PathBuf {
    let mut text = String::from("row_index,col_index\n");
    for (r, c) in entries {
        text.push_str(&format!("{r},{c}\n"));
    }
    let path = config.paths.sparsity_input();
    fs::write(&path, text).unwrap();
    path
}

/// Five-point Laplacian stencil pattern on a `side × side` grid.
pub fn laplacian_pattern(side: usize) -> Vec<(usize, usize)> {
    let mut entries = Vec::new();
    for i in 0..side {
        for j in 0..side {
            let row = i * side + j;
            entries.push((row, row));
            if j > 0 {
                entries.push((row, row - 1));
            }
            if j + 1 < side {
                entries.push((row, row + 1));
            }
            if i > 0 {
                entries.push((row, row - side));
            }
            if i + 1 < side {
                entries.push((row, row + side));
            }
        }
    }
    entries
}

pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".png"))
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}
