use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "PathsConfig::default_plots_dir")]
    pub plots_dir: PathBuf,
}

impl PathsConfig {
    fn default_data_dir() -> PathBuf {
        PathBuf::from("data")
    }
    fn default_plots_dir() -> PathBuf {
        PathBuf::from("plots")
    }

    pub fn convergence_input(&self) -> PathBuf {
        self.data_dir.join("convergence_data.csv")
    }

    pub fn mode_input(&self, mode: usize) -> PathBuf {
        self.data_dir.join(format!("mode_{mode:02}.csv"))
    }

    pub fn sparsity_input(&self) -> PathBuf {
        self.data_dir.join("matrix_pattern.csv")
    }

    pub fn convergence_output(&self) -> PathBuf {
        self.plots_dir.join("convergence.png")
    }

    pub fn mode_output(&self, mode: usize) -> PathBuf {
        self.plots_dir.join(format!("mode_{mode:02}.png"))
    }

    pub fn sparsity_output(&self) -> PathBuf {
        self.plots_dir.join("matrix_sparsity.png")
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            plots_dir: Self::default_plots_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_dpi")]
    pub dpi: u32,
    #[serde(default = "FigureConfig::default_font_family")]
    pub font_family: String,
}

impl FigureConfig {
    fn default_dpi() -> u32 {
        300
    }
    fn default_font_family() -> String {
        "sans-serif".to_string()
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            dpi: Self::default_dpi(),
            font_family: Self::default_font_family(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceConfig {
    #[serde(default = "ConvergenceConfig::default_width_in")]
    pub width_in: f64,
    #[serde(default = "ConvergenceConfig::default_height_in")]
    pub height_in: f64,
}

impl ConvergenceConfig {
    fn default_width_in() -> f64 {
        15.0
    }
    fn default_height_in() -> f64 {
        5.0
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModesConfig {
    #[serde(default = "ModesConfig::default_count")]
    pub count: usize,
    #[serde(default = "ModesConfig::default_width_in")]
    pub width_in: f64,
    #[serde(default = "ModesConfig::default_height_in")]
    pub height_in: f64,
    /// Camera rotation around the vertical axis, radians.
    #[serde(default = "ModesConfig::default_yaw")]
    pub yaw: f64,
    /// Camera elevation, radians.
    #[serde(default = "ModesConfig::default_pitch")]
    pub pitch: f64,
}

impl ModesConfig {
    fn default_count() -> usize {
        5
    }
    fn default_width_in() -> f64 {
        10.0
    }
    fn default_height_in() -> f64 {
        8.0
    }
    fn default_yaw() -> f64 {
        0.7
    }
    fn default_pitch() -> f64 {
        0.45
    }
}

impl Default for ModesConfig {
    fn default() -> Self {
        Self {
            count: Self::default_count(),
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
            yaw: Self::default_yaw(),
            pitch: Self::default_pitch(),
        }
    }
}

/// How the reported matrix dimensions of a sparsity pattern are obtained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SparsityDims {
    Fixed { rows: usize, cols: usize },
    /// `max index + 1` along each axis.
    Derived,
}

impl Default for SparsityDims {
    fn default() -> Self {
        Self::Fixed {
            rows: 2500,
            cols: 2500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparsityConfig {
    #[serde(default = "SparsityConfig::default_width_in")]
    pub width_in: f64,
    #[serde(default = "SparsityConfig::default_height_in")]
    pub height_in: f64,
    #[serde(default)]
    pub dims: SparsityDims,
}

impl SparsityConfig {
    fn default_width_in() -> f64 {
        10.0
    }
    fn default_height_in() -> f64 {
        10.0
    }
}

impl Default for SparsityConfig {
    fn default() -> Self {
        Self {
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
            dims: SparsityDims::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlotConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub convergence: ConvergenceConfig,
    #[serde(default)]
    pub modes: ModesConfig,
    #[serde(default)]
    pub sparsity: SparsityConfig,
}

impl PlotConfig {
    /// Reads `path` when it exists; defaults otherwise. Read or parse errors are
    /// logged and also fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => {
                    debug!("loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    warn!(
                        "failed to parse config {}: {err}. Using defaults.",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    "failed to read config {}: {err}. Using defaults.",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.figure.dpi, 300);
        assert_eq!(cfg.modes.count, 5);
        assert_eq!(
            cfg.paths.convergence_input(),
            PathBuf::from("data/convergence_data.csv")
        );
        assert_eq!(cfg.paths.mode_input(3), PathBuf::from("data/mode_03.csv"));
        assert_eq!(cfg.paths.mode_output(5), PathBuf::from("plots/mode_05.png"));
        assert_eq!(
            cfg.paths.sparsity_output(),
            PathBuf::from("plots/matrix_sparsity.png")
        );
        assert_eq!(
            cfg.sparsity.dims,
            SparsityDims::Fixed {
                rows: 2500,
                cols: 2500
            }
        );
    }

    #[test]
    fn load_or_default_missing_file_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots.toml");
        let cfg = PlotConfig::load_or_default(&path);
        assert_eq!(cfg.figure.dpi, 300);
        assert!(!path.exists());
    }

    #[test]
    fn load_or_default_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots.toml");
        fs::write(
            &path,
            r#"
[figure]
dpi = 100

[modes]
count = 3

[sparsity.dims]
mode = "derived"
"#,
        )
        .unwrap();

        let cfg = PlotConfig::load_or_default(&path);
        assert_eq!(cfg.figure.dpi, 100);
        assert_eq!(cfg.figure.font_family, "sans-serif");
        assert_eq!(cfg.modes.count, 3);
        assert_eq!(cfg.modes.width_in, 10.0);
        assert_eq!(cfg.sparsity.dims, SparsityDims::Derived);
        assert_eq!(cfg.paths.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn load_or_default_falls_back_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        let cfg = PlotConfig::load_or_default(&path);
        assert_eq!(cfg.modes.count, 5);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = PlotConfig::default();
        cfg.sparsity.dims = SparsityDims::Fixed { rows: 10, cols: 20 };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PlotConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.sparsity.dims, cfg.sparsity.dims);
        assert_eq!(parsed.convergence.width_in, 15.0);
    }
}
