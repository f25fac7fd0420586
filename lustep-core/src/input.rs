//! Editable n×n grid backing the matrix entry form

use crate::constants::DEFAULT_SIZE;
use crate::validation::{parse_cell, validate_index, validate_size};
use crate::{LuError, Matrix, Result};

/// Matrix being entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixInput {
    matrix: Matrix,
}

impl Default for MatrixInput {
    fn default() -> Self {
        Self {
            matrix: Matrix::zeros(DEFAULT_SIZE),
        }
    }
}

impl MatrixInput {
    /// Zero-filled grid of the given size
    pub fn new(size: usize) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            matrix: Matrix::zeros(size),
        })
    }

    /// Current size n
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Change size; every cell is reset to zero
    pub fn resize(&mut self, size: usize) -> Result<()> {
        let size = validate_size(size)?;
        self.matrix = Matrix::zeros(size);
        Ok(())
    }

    /// Edit one cell from its text
    ///
    /// Returns `Ok(true)` when the cell changed. Text that does not parse
    /// leaves the cell as it was and returns `Ok(false)`.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<bool> {
        validate_index(row, col, self.size())?;
        match parse_cell(text) {
            Some(value) => {
                self.matrix.set(row, col, value);
                Ok(true)
            }
            None => {
                tracing::debug!(row, col, text, "ignoring unparseable cell");
                Ok(false)
            }
        }
    }

    /// Replace the whole grid, e.g. with an example or random matrix
    ///
    /// The size follows the new matrix, which must be square and in range.
    pub fn set_matrix(&mut self, matrix: Matrix) -> Result<()> {
        let (rows, cols) = (matrix.nrows(), matrix.ncols());
        if rows != cols {
            return Err(LuError::NotSquare { rows, cols });
        }
        validate_size(rows)?;
        self.matrix = matrix;
        Ok(())
    }

    /// The entered matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}
