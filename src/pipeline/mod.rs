//! Loader → shaper → renderer sequences, each wrapped in its own error boundary.

pub mod convergence;
pub mod modes;
pub mod sparsity;

use std::fmt;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::render::PlotRenderer;

pub use convergence::run_convergence;
pub use modes::run_modes;
pub use sparsity::run_sparsity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Convergence,
    Modes,
    Sparsity,
}

impl Pipeline {
    pub const ALL: [Pipeline; 3] = [Pipeline::Convergence, Pipeline::Modes, Pipeline::Sparsity];

    pub fn name(self) -> &'static str {
        match self {
            Pipeline::Convergence => "convergence",
            Pipeline::Modes => "modes",
            Pipeline::Sparsity => "sparsity",
        }
    }

    pub fn run<R: PlotRenderer + ?Sized>(self, config: &PlotConfig, renderer: &mut R) -> RunReport {
        match self {
            Pipeline::Convergence => run_convergence(config, renderer),
            Pipeline::Modes => run_modes(config, renderer),
            Pipeline::Sparsity => run_sparsity(config, renderer),
        }
    }
}

/// Result of one attempted artifact.
#[derive(Debug)]
pub enum Outcome {
    Written(PathBuf),
    /// Expected input was absent; not an error.
    Skipped { mode: usize, input: PathBuf },
    Failed { target: PathBuf, error: PlotError },
}

#[derive(Debug)]
pub struct RunReport {
    pub pipeline: Pipeline,
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn written(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Written(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Skipped { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PlotError> {
        self.outcomes.iter().filter_map(|o| match o {
            Outcome::Failed { error, .. } => Some(error),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} written, {} skipped, {} failed",
            self.pipeline.name(),
            self.written().len(),
            self.skipped(),
            self.failures().count()
        )
    }
}

/// `create_dir_all` is a no-op on an existing directory.
pub(crate) fn ensure_output_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).map_err(|e| PlotError::render(dir, format!("cannot create directory: {e}")))
}
