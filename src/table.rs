//! Rectangular numeric tables with named columns.
//!
//! Every estimator in this crate consumes data through [`Table`]: a
//! rectangular `f64` matrix plus one label per column. The [`IntoTable`]
//! adapters normalise the external representations (scalars, flat
//! sequences, 2D sequences, `nalgebra` matrices) at the boundary, so the
//! estimators themselves only ever see validated matrices.

use std::fmt::{self, Display};

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// A rectangular matrix of finite reals with one label per column.
///
/// Construction validates the shape and every entry; the contents are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    values: DMatrix<f64>,
    columns: Vec<String>,
}

impl Table {
    /// Build a table from a matrix and explicit column labels.
    ///
    /// Fails if the matrix is empty, the label count does not match the
    /// column count, or any entry is non-finite.
    pub fn new(values: DMatrix<f64>, columns: Vec<String>) -> Result<Self> {
        if values.nrows() == 0 || values.ncols() == 0 {
            return Err(Error::Empty);
        }
        if columns.len() != values.ncols() {
            return Err(Error::LabelCount {
                columns: values.ncols(),
                got: columns.len(),
            });
        }
        for row in 0..values.nrows() {
            for column in 0..values.ncols() {
                let value = values[(row, column)];
                if !value.is_finite() {
                    return Err(Error::NonFinite { row, column, value });
                }
            }
        }
        Ok(Self { values, columns })
    }

    /// Build a table labelling columns `{label}0`, `{label}1`, …
    pub fn with_default_labels(values: DMatrix<f64>, label: &str) -> Result<Self> {
        let columns = (0..values.ncols()).map(|i| format!("{label}{i}")).collect();
        Self::new(values, columns)
    }

    /// Wrap values that the crate computed itself (prediction output may
    /// legitimately contain NaN sentinels, so the finite check is skipped).
    pub(crate) fn from_parts(values: DMatrix<f64>, columns: Vec<String>) -> Self {
        debug_assert_eq!(values.ncols(), columns.len());
        Self { values, columns }
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Entry at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[(row, column)]
    }

    /// One column as an owned vector.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.values.column(column).iter().copied().collect()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_labels: Vec<String> = (0..self.nrows()).map(|i| i.to_string()).collect();
        write_aligned(f, &row_labels, &self.columns, &self.values)
    }
}

/// Aligned textual dump shared by [`Table`] and the coefficient tables.
pub(crate) fn write_aligned(
    f: &mut fmt::Formatter<'_>,
    row_labels: &[String],
    column_labels: &[String],
    values: &DMatrix<f64>,
) -> fmt::Result {
    let cells: Vec<Vec<String>> = (0..values.nrows())
        .map(|row| {
            (0..values.ncols())
                .map(|column| format!("{:.6}", values[(row, column)]))
                .collect()
        })
        .collect();

    let label_width = row_labels.iter().map(String::len).max().unwrap_or(0);
    let mut widths: Vec<usize> = column_labels.iter().map(String::len).collect();
    for row in &cells {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.len());
        }
    }

    write!(f, "{:label_width$}", "")?;
    for (column, label) in column_labels.iter().enumerate() {
        write!(f, "  {:>width$}", label, width = widths[column])?;
    }
    for (row, cells) in cells.iter().enumerate() {
        writeln!(f)?;
        write!(f, "{:<label_width$}", row_labels[row])?;
        for (column, cell) in cells.iter().enumerate() {
            write!(f, "  {:>width$}", cell, width = widths[column])?;
        }
    }
    Ok(())
}

/// Normalisation into a [`Table`].
///
/// `label` names the columns (`X` becomes `X0`, `X1`, …) when the source
/// carries no labels of its own.
pub trait IntoTable {
    fn into_table(self, label: &str) -> Result<Table>;
}

impl IntoTable for Table {
    fn into_table(self, _label: &str) -> Result<Table> {
        Ok(self)
    }
}

impl IntoTable for &Table {
    fn into_table(self, _label: &str) -> Result<Table> {
        Ok(self.clone())
    }
}

impl IntoTable for f64 {
    fn into_table(self, label: &str) -> Result<Table> {
        Table::with_default_labels(DMatrix::from_element(1, 1, self), label)
    }
}

impl IntoTable for &[f64] {
    fn into_table(self, label: &str) -> Result<Table> {
        Table::with_default_labels(DMatrix::from_column_slice(self.len(), 1, self), label)
    }
}

impl IntoTable for Vec<f64> {
    fn into_table(self, label: &str) -> Result<Table> {
        self.as_slice().into_table(label)
    }
}

impl IntoTable for &Vec<f64> {
    fn into_table(self, label: &str) -> Result<Table> {
        self.as_slice().into_table(label)
    }
}

impl<const N: usize> IntoTable for [f64; N] {
    fn into_table(self, label: &str) -> Result<Table> {
        self.as_slice().into_table(label)
    }
}

impl IntoTable for &[Vec<f64>] {
    fn into_table(self, label: &str) -> Result<Table> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let expected = self[0].len();
        for (row, values) in self.iter().enumerate() {
            if values.len() != expected {
                return Err(Error::RaggedRows {
                    row,
                    expected,
                    got: values.len(),
                });
            }
        }
        let values = DMatrix::from_fn(self.len(), expected, |row, column| self[row][column]);
        Table::with_default_labels(values, label)
    }
}

impl IntoTable for Vec<Vec<f64>> {
    fn into_table(self, label: &str) -> Result<Table> {
        self.as_slice().into_table(label)
    }
}

impl<const N: usize> IntoTable for &[[f64; N]] {
    fn into_table(self, label: &str) -> Result<Table> {
        let values = DMatrix::from_fn(self.len(), N, |row, column| self[row][column]);
        Table::with_default_labels(values, label)
    }
}

impl IntoTable for DMatrix<f64> {
    fn into_table(self, label: &str) -> Result<Table> {
        Table::with_default_labels(self, label)
    }
}

impl IntoTable for &DMatrix<f64> {
    fn into_table(self, label: &str) -> Result<Table> {
        Table::with_default_labels(self.clone(), label)
    }
}
