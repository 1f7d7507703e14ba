use ndarray::Array2;

use crate::data::table::Table;
use crate::error::{PlotError, Result};

/// Sampled mode shape on an `n × n` grid, stored row-major as in the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeGrid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub amplitude: Array2<f64>,
}

impl ModeGrid {
    /// Uses the first three columns as `(x, y, amplitude)`; any further columns
    /// are ignored.
    pub fn from_table(table: &Table) -> Result<Self> {
        if table.n_cols() < 3 {
            return Err(PlotError::shape(format!(
                "mode file needs at least 3 columns (x, y, amplitude), found {}",
                table.n_cols()
            )));
        }
        let mut x = Vec::with_capacity(table.n_rows());
        let mut y = Vec::with_capacity(table.n_rows());
        let mut amplitude = Vec::with_capacity(table.n_rows());
        for row in table.rows() {
            x.push(row[0]);
            y.push(row[1]);
            amplitude.push(row[2]);
        }
        Self::from_columns(x, y, amplitude)
    }

    pub fn from_columns(x: Vec<f64>, y: Vec<f64>, amplitude: Vec<f64>) -> Result<Self> {
        let count = x.len();
        if y.len() != count || amplitude.len() != count {
            return Err(PlotError::shape("mode columns differ in length"));
        }
        let n = exact_sqrt(count)
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                PlotError::shape(format!("{count} rows cannot be reshaped into a square grid"))
            })?;
        let reshape = |v: Vec<f64>| {
            Array2::from_shape_vec((n, n), v).map_err(|e| PlotError::shape(e.to_string()))
        };
        Ok(Self {
            x: reshape(x)?,
            y: reshape(y)?,
            amplitude: reshape(amplitude)?,
        })
    }

    /// Points per side.
    pub fn n(&self) -> usize {
        self.amplitude.nrows()
    }

    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.x)
    }

    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.y)
    }

    pub fn amplitude_range(&self) -> (f64, f64) {
        min_max(&self.amplitude)
    }
}

/// `Some(n)` when `count == n * n`.
pub fn exact_sqrt(count: usize) -> Option<usize> {
    let guess = (count as f64).sqrt().round() as usize;
    // f64 rounding can be off by one for very large counts
    (guess.saturating_sub(1)..=guess + 1).find(|&n| n.checked_mul(n) == Some(count))
}

fn min_max(values: &Array2<f64>) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
