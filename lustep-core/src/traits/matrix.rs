//! Read-only matrix access trait
//!
//! Structural checks (squareness, triangularity) are written once against
//! this trait so they apply to any dense view of the data.

/// Core dense matrix trait for element access
pub trait MatrixView {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Whether rows == cols
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dimensions();
        rows == cols
    }

    /// Lower triangular with exactly 1 on the diagonal
    ///
    /// Entries above the diagonal must be within `tol` of zero; the diagonal
    /// is compared exactly.
    fn is_unit_lower_triangular(&self, tol: f64) -> bool {
        let (rows, cols) = self.dimensions();
        for i in 0..rows {
            for j in 0..cols {
                let value = self.get_element(i, j).unwrap_or(f64::NAN);
                let ok = match i.cmp(&j) {
                    core::cmp::Ordering::Equal => value == 1.0,
                    core::cmp::Ordering::Less => value.abs() <= tol,
                    core::cmp::Ordering::Greater => true,
                };
                if !ok {
                    return false;
                }
            }
        }
        self.is_square()
    }

    /// All entries below the diagonal within `tol` of zero
    fn is_upper_triangular(&self, tol: f64) -> bool {
        let (rows, cols) = self.dimensions();
        for i in 1..rows {
            for j in 0..i.min(cols) {
                match self.get_element(i, j) {
                    Some(value) if value.abs() <= tol => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
