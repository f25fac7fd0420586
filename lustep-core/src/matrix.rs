//! Dense square matrix used for A, L, U and the verification product
//!
//! Storage is rows-outer. Cloning is a full deep copy, which is what every
//! snapshot of the decomposition relies on.

use crate::{LuError, MatrixView, Result};

/// Dense row-major matrix of `f64`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build from rows, checking that every row has the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(LuError::EmptyMatrix);
        }
        let cols = rows[0].len();
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(LuError::DimensionMismatch {
                expected: (rows.len(), cols),
                actual: (rows.len(), bad.len()),
            });
        }
        Ok(Self { rows })
    }

    /// Build a square matrix from rows, rejecting empty or non-square input
    pub fn square(rows: Vec<Vec<f64>>) -> Result<Self> {
        let matrix = Self::from_rows(rows)?;
        let (rows, cols) = matrix.dimensions();
        if rows != cols {
            return Err(LuError::NotSquare { rows, cols });
        }
        Ok(matrix)
    }

    /// Wrap rows without any shape check
    ///
    /// Used where the caller owns the shape invariant, e.g. the product of
    /// two matrices computed in this crate.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// n×n matrix of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// n×n identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /// Build from a function of (row, col)
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                row.push(f(i, j));
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Number of rows
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (length of the first row)
    #[inline]
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Row count, which is the size n for the square matrices this crate uses
    #[inline]
    pub fn size(&self) -> usize {
        self.nrows()
    }

    /// Element access (row, col). Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Element write (row, col). Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.rows[row][col] = value;
    }

    /// Checked element write
    pub fn try_set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let size = self.nrows();
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(LuError::IndexOutOfBounds { row, col, size }),
        }
    }

    /// Borrow one row
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    /// Borrow all rows
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// `row[target][j] -= factor * row[source][j]` for j in `from_col..`
    pub(crate) fn subtract_scaled_row(
        &mut self,
        target: usize,
        source: usize,
        factor: f64,
        from_col: usize,
    ) {
        let ncols = self.ncols();
        for j in from_col..ncols {
            let pivot_val = self.rows[source][j];
            self.rows[target][j] -= factor * pivot_val;
        }
    }
}

impl MatrixView for Matrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl core::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix {
    fn from(rows: [[f64; N]; N]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }
}
