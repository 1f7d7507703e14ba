use std::fs::read_to_string;
use std::io;
use std::path::Path;

use crate::error::{PlotError, Result};

/// Whether the first line of a delimited file is a header to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Skip,
    Absent,
}

/// Rectangular block of finite numbers read from a comma-delimited file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    n_cols: usize,
    values: Vec<f64>,
}

impl Table {
    /// Builds a table from in-memory rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut values = Vec::with_capacity(n_cols * rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(PlotError::shape(format!(
                    "row {} has {} columns, expected {n_cols}",
                    i + 1,
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self { n_cols, values })
    }

    pub fn n_rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.values.len() / self.n_cols
        }
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.n_cols.max(1))
    }

    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.n_cols {
            return None;
        }
        Some(self.rows().map(|row| row[col]).collect())
    }
}

/// Reads a comma-delimited numeric file. A missing file maps to
/// [`PlotError::MissingFile`] so callers can tell it apart from bad content.
pub fn load_table(path: &Path, header: Header) -> Result<Table> {
    let text = read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            PlotError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            PlotError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_table(&text, path, header)
}

/// Parses delimited text. Blank lines and `#` comments are ignored; the header,
/// when present, is the first physical line.
pub fn parse_table(text: &str, path: &Path, header: Header) -> Result<Table> {
    let skip = match header {
        Header::Skip => 1,
        Header::Absent => 0,
    };
    let mut n_cols: Option<usize> = None;
    let mut values = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(skip) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = trimmed.split(',').collect();
        let expected = *n_cols.get_or_insert(cols.len());
        if cols.len() != expected {
            return Err(PlotError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("expected {expected} columns, found {}", cols.len()),
            });
        }
        for (c, token) in cols.iter().enumerate() {
            let token = token.trim();
            let value = token.parse::<f64>().map_err(|e| PlotError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("column {}: invalid number `{token}`: {e}", c + 1),
            })?;
            if !value.is_finite() {
                return Err(PlotError::Parse {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: format!("column {}: non-finite value `{token}`", c + 1),
                });
            }
            values.push(value);
        }
    }

    Ok(Table {
        n_cols: n_cols.unwrap_or(0),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(text: &str, header: Header) -> Result<Table> {
        parse_table(text, Path::new("test.csv"), header)
    }

    #[test]
    fn skips_header_blank_lines_and_comments() {
        let table = parse(
            "grid_size,eig1\n# produced by solver\n10, 1.5\n\n20,1.25\n",
            Header::Skip,
        )
        .unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column(0), Some(vec![10.0, 20.0]));
        assert_eq!(table.column(1), Some(vec![1.5, 1.25]));
        assert_eq!(table.column(2), None);
    }

    #[test]
    fn headerless_first_line_is_data() {
        let table = parse("0,0,1\n0,1,2\n", Header::Absent).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.rows().next(), Some(&[0.0, 0.0, 1.0][..]));
    }

    #[test]
    fn ragged_rows_report_line() {
        let err = parse("a,b\n1,2\n3\n", Header::Skip).unwrap_err();
        match err {
            PlotError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_and_non_finite_are_malformed() {
        let err = parse("1,abc\n", Header::Absent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
        let err = parse("1,NaN\n", Header::Absent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
    }

    #[test]
    fn header_only_is_empty() {
        let table = parse("row,col\n", Header::Skip).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn missing_file_is_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("absent.csv"), Header::Skip).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingFile);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(Table::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
        let table = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(table.column(1), Some(vec![2.0, 4.0]));
    }
}
