//! Loading delimited files and shaping them into plottable structures.

pub mod convergence;
pub mod mode_grid;
pub mod sparsity;
pub mod table;

pub use convergence::ConvergenceTable;
pub use mode_grid::ModeGrid;
pub use sparsity::{MatrixDims, SparsityPattern};
pub use table::{Header, Table, load_table};
