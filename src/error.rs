use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An expected input file is absent.
    MissingFile,
    /// The file exists but its content does not fit the expected shape or type.
    MalformedData,
    /// Figure construction, encoding or saving failed.
    RenderFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::MissingFile => "missing-file",
            ErrorKind::MalformedData => "malformed-data",
            ErrorKind::RenderFailure => "render-failure",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("input file not found: {}", .path.display())]
    MissingFile { path: PathBuf },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("invalid data shape: {0}")]
    Shape(String),
    #[error("render failed for {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}

impl PlotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlotError::MissingFile { .. } => ErrorKind::MissingFile,
            PlotError::Io { .. } | PlotError::Parse { .. } | PlotError::Shape(_) => {
                ErrorKind::MalformedData
            }
            PlotError::Render { .. } => ErrorKind::RenderFailure,
        }
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        PlotError::Shape(reason.into())
    }

    pub(crate) fn render(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        PlotError::Render {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
