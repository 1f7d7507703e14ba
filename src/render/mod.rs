//! Figure rendering. Pipelines talk to [`PlotRenderer`]; [`PlottersRenderer`]
//! draws with plotters into an in-memory canvas and saves PNG files.

pub mod canvas;
pub mod colormap;
mod convergence;
mod sparsity;
mod surface;

use std::path::Path;

use crate::config::{ConvergenceConfig, FigureConfig, ModesConfig, PlotConfig, SparsityConfig};
use crate::data::{ConvergenceTable, ModeGrid, SparsityPattern};
use crate::error::Result;

pub use canvas::{FigureSpec, render_png};
pub use surface::View;

pub trait PlotRenderer {
    fn render_convergence(&mut self, table: &ConvergenceTable, out_path: &Path) -> Result<()>;

    fn render_mode(&mut self, mode: usize, grid: &ModeGrid, out_path: &Path) -> Result<()>;

    fn render_sparsity(&mut self, pattern: &SparsityPattern, out_path: &Path) -> Result<()>;
}

pub struct PlottersRenderer {
    figure: FigureConfig,
    convergence: ConvergenceConfig,
    modes: ModesConfig,
    sparsity: SparsityConfig,
}

impl PlottersRenderer {
    pub fn new(config: &PlotConfig) -> Self {
        Self {
            figure: config.figure.clone(),
            convergence: config.convergence.clone(),
            modes: config.modes.clone(),
            sparsity: config.sparsity.clone(),
        }
    }

    fn spec(&self, width_in: f64, height_in: f64) -> FigureSpec {
        FigureSpec {
            width_in,
            height_in,
            dpi: self.figure.dpi,
        }
    }
}

impl PlotRenderer for PlottersRenderer {
    fn render_convergence(&mut self, table: &ConvergenceTable, out_path: &Path) -> Result<()> {
        let spec = self.spec(self.convergence.width_in, self.convergence.height_in);
        let font = self.figure.font_family.as_str();
        render_png(&spec, out_path, |root| {
            convergence::draw_convergence(root, table, &spec, font)
        })
    }

    fn render_mode(&mut self, mode: usize, grid: &ModeGrid, out_path: &Path) -> Result<()> {
        let spec = self.spec(self.modes.width_in, self.modes.height_in);
        let font = self.figure.font_family.as_str();
        let view = View {
            yaw: self.modes.yaw,
            pitch: self.modes.pitch,
        };
        render_png(&spec, out_path, |root| {
            surface::draw_mode_surface(root, mode, grid, &spec, font, view)
        })
    }

    fn render_sparsity(&mut self, pattern: &SparsityPattern, out_path: &Path) -> Result<()> {
        let spec = self.spec(self.sparsity.width_in, self.sparsity.height_in);
        let font = self.figure.font_family.as_str();
        render_png(&spec, out_path, |root| {
            sparsity::draw_sparsity(root, pattern, &spec, font)
        })
    }
}
