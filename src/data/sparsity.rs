use crate::config::SparsityDims;
use crate::data::table::Table;
use crate::error::{PlotError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDims {
    pub rows: usize,
    pub cols: usize,
}

/// Non-zero entry locations of a sparse matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SparsityPattern {
    entries: Vec<(usize, usize)>,
    dims: MatrixDims,
}

impl SparsityPattern {
    /// Reads `(row_index, col_index)` from the first two columns; trailing
    /// columns such as CSR values are ignored. A header-only file is an empty
    /// pattern.
    pub fn from_table(table: &Table, dims: SparsityDims) -> Result<Self> {
        if table.is_empty() {
            return Self::new(Vec::new(), dims);
        }
        if table.n_cols() < 2 {
            return Err(PlotError::shape(format!(
                "sparsity pattern needs at least 2 columns (row, col), found {}",
                table.n_cols()
            )));
        }
        let mut entries = Vec::with_capacity(table.n_rows());
        for (i, row) in table.rows().enumerate() {
            let r = as_index(row[0]).ok_or_else(|| bad_index(i, "row", row[0]))?;
            let c = as_index(row[1]).ok_or_else(|| bad_index(i, "column", row[1]))?;
            entries.push((r, c));
        }
        Self::new(entries, dims)
    }

    pub fn new(entries: Vec<(usize, usize)>, dims: SparsityDims) -> Result<Self> {
        let dims = match dims {
            SparsityDims::Fixed { rows, cols } => {
                if let Some(&(r, c)) = entries.iter().find(|&&(r, c)| r >= rows || c >= cols) {
                    return Err(PlotError::shape(format!(
                        "entry ({r}, {c}) lies outside a {rows} x {cols} matrix"
                    )));
                }
                MatrixDims { rows, cols }
            }
            SparsityDims::Derived => MatrixDims {
                rows: derived_extent(entries.iter().map(|&(r, _)| r), "row")?,
                cols: derived_extent(entries.iter().map(|&(_, c)| c), "column")?,
            },
        };
        Ok(Self { entries, dims })
    }

    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }

    pub fn dims(&self) -> MatrixDims {
        self.dims
    }

    /// Stored entries, duplicates included.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn sparsity_percent(&self) -> f64 {
        sparsity_percent(self.nnz(), self.dims.rows, self.dims.cols)
    }

    /// Lines of the overlay box drawn on the sparsity figure.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Dimensions: {} x {}", self.dims.rows, self.dims.cols),
            format!("Non-zeros: {}", self.nnz()),
            format!("Sparsity: {:.2}%", self.sparsity_percent()),
        ]
    }
}

/// `(1 - nnz / (rows * cols)) * 100`; an empty matrix counts as fully sparse.
pub fn sparsity_percent(nnz: usize, rows: usize, cols: usize) -> f64 {
    let total = rows as f64 * cols as f64;
    if total == 0.0 {
        return 100.0;
    }
    (1.0 - nnz as f64 / total) * 100.0
}

/// `max index + 1`, or 0 for no entries.
fn derived_extent(indices: impl Iterator<Item = usize>, axis: &str) -> Result<usize> {
    match indices.max() {
        None => Ok(0),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            PlotError::shape(format!("{axis} index {max} is too large to size a matrix"))
        }),
    }
}

// `usize::MAX as f64` rounds up to 2^64, which does not fit.
fn as_index(value: f64) -> Option<usize> {
    if value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

fn bad_index(row: usize, axis: &str, value: f64) -> PlotError {
    PlotError::shape(format!(
        "entry {}: {axis} index {value} is not a non-negative integer",
        row + 1
    ))
}
