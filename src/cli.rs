use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::PlotConfig;
use crate::pipeline::Pipeline;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Which plots to generate
    #[arg(value_enum, default_value_t = Target::All)]
    pub target: Target,

    /// Path to config TOML (defaults are used when the file is absent)
    #[arg(long, default_value = "plots.toml")]
    pub config: PathBuf,

    /// Directory holding the solver CSV files (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory receiving the PNG files (overrides config)
    #[arg(long)]
    pub plots_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    All,
    Convergence,
    Modes,
    Sparsity,
}

impl Target {
    pub fn pipelines(self) -> Vec<Pipeline> {
        match self {
            Target::All => Pipeline::ALL.to_vec(),
            Target::Convergence => vec![Pipeline::Convergence],
            Target::Modes => vec![Pipeline::Modes],
            Target::Sparsity => vec![Pipeline::Sparsity],
        }
    }
}

impl Args {
    /// Config file contents with command-line overrides applied.
    pub fn resolve_config(&self) -> PlotConfig {
        let mut config = PlotConfig::load_or_default(&self.config);
        if let Some(dir) = &self.data_dir {
            config.paths.data_dir = dir.clone();
        }
        if let Some(dir) = &self.plots_dir {
            config.paths.plots_dir = dir.clone();
        }
        config
    }
}
