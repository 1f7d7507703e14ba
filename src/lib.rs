//! Diagnostic plots for a finite-difference membrane eigenmode solver.
//!
//! Three independent pipelines read the solver's CSV output and write PNG figures:
//! eigenvalue convergence across grid sizes, 3D mode surfaces, and the sparsity
//! pattern of the discretization matrix.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;

pub use config::PlotConfig;
pub use error::{ErrorKind, PlotError};
pub use pipeline::{Outcome, Pipeline, RunReport};
