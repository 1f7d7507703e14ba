use crate::data::table::Table;
use crate::error::{PlotError, Result};

pub const EIGENVALUE_COLUMNS: usize = 5;
/// Grid size followed by one column per eigenvalue.
pub const CONVERGENCE_COLUMNS: usize = 1 + EIGENVALUE_COLUMNS;

/// Eigenvalues of the first modes computed at several grid resolutions.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceTable {
    grid_sizes: Vec<u32>,
    eigenvalues: Vec<[f64; EIGENVALUE_COLUMNS]>,
}

impl ConvergenceTable {
    /// Column count is checked before any column is read, so a narrow table never
    /// reaches the plotting code.
    pub fn from_table(table: &Table) -> Result<Self> {
        if table.n_cols() != CONVERGENCE_COLUMNS {
            return Err(PlotError::shape(format!(
                "convergence table needs {CONVERGENCE_COLUMNS} columns (grid size + {EIGENVALUE_COLUMNS} eigenvalues), found {}",
                table.n_cols()
            )));
        }
        if table.n_rows() == 0 {
            return Err(PlotError::shape("convergence table has no rows"));
        }

        let mut grid_sizes = Vec::with_capacity(table.n_rows());
        let mut eigenvalues = Vec::with_capacity(table.n_rows());
        for (i, row) in table.rows().enumerate() {
            let n = row[0];
            if n < 1.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
                return Err(PlotError::shape(format!(
                    "row {}: grid size {n} is not a positive integer",
                    i + 1
                )));
            }
            let mut eig = [0.0; EIGENVALUE_COLUMNS];
            for (k, slot) in eig.iter_mut().enumerate() {
                let value = row[k + 1];
                // log-log axes
                if value <= 0.0 {
                    return Err(PlotError::shape(format!(
                        "row {}: eigenvalue {} = {value} is not positive",
                        i + 1,
                        k + 1
                    )));
                }
                *slot = value;
            }
            grid_sizes.push(n as u32);
            eigenvalues.push(eig);
        }

        Ok(Self {
            grid_sizes,
            eigenvalues,
        })
    }

    /// Number of grid refinements; never zero.
    pub fn rows(&self) -> usize {
        self.grid_sizes.len()
    }

    pub fn grid_sizes(&self) -> &[u32] {
        &self.grid_sizes
    }

    /// `(N, eigenvalue)` points for a 1-based mode index.
    pub fn mode_series(&self, mode: usize) -> Option<Vec<(f64, f64)>> {
        if mode == 0 || mode > EIGENVALUE_COLUMNS {
            return None;
        }
        Some(
            self.grid_sizes
                .iter()
                .zip(&self.eigenvalues)
                .map(|(&n, eig)| (f64::from(n), eig[mode - 1]))
                .collect(),
        )
    }
}
