//! Recompute L × U and compare it with the input

use crate::constants::{PRODUCT_DECIMALS, VERIFY_EPSILON};
use crate::{LuError, Matrix, MatrixView, Result};

/// Outcome of checking a factorization
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Verification {
    /// L × U, rounded to three decimals per entry
    pub product: Matrix,
    /// Whether the product matches A within [`VERIFY_EPSILON`]
    pub is_correct: bool,
}

impl Verification {
    /// Banner text for the result view
    pub fn message(&self) -> &'static str {
        if self.is_correct {
            "The decomposition is correct! A = L × U"
        } else {
            "The decomposition has some errors. A ≠ L × U"
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Matrix product with each entry rounded to three decimals
///
/// Panics if `a.ncols() != b.nrows()`; see [`try_multiply`].
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.ncols(), b.nrows(), "multiply: inner dimensions differ");
    let (rows, inner, cols) = (a.nrows(), a.ncols(), b.ncols());
    let mut result = vec![vec![0.0; cols]; rows];

    for (i, out_row) in result.iter_mut().enumerate() {
        for (j, out) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += a.get(i, k) * b.get(k, j);
            }
            *out = round_to(sum, PRODUCT_DECIMALS);
        }
    }

    Matrix::from_rows_unchecked(result)
}

/// Checked [`multiply`]
pub fn try_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(LuError::DimensionMismatch {
            expected: (a.ncols(), b.ncols()),
            actual: b.dimensions(),
        });
    }
    Ok(multiply(a, b))
}

/// True iff shapes match exactly and every entry differs by at most `epsilon`
pub fn approx_equal(p: &Matrix, a: &Matrix, epsilon: f64) -> bool {
    if p.nrows() != a.nrows() {
        return false;
    }
    p.rows().iter().zip(a.rows()).all(|(pr, ar)| {
        pr.len() == ar.len() && pr.iter().zip(ar).all(|(x, y)| (x - y).abs() <= epsilon)
    })
}

/// Multiply `l` by `u` and compare against `a`
///
/// Shape problems are reported as an incorrect verification, never as an
/// error.
pub fn verify(a: &Matrix, l: &Matrix, u: &Matrix) -> Verification {
    match try_multiply(l, u) {
        Ok(product) => {
            let is_correct = approx_equal(&product, a, VERIFY_EPSILON);
            Verification {
                product,
                is_correct,
            }
        }
        Err(err) => {
            tracing::debug!(%err, "verification skipped");
            Verification {
                product: Matrix::default(),
                is_correct: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_rounds_entries() {
        let l = Matrix::from([[1.0, 0.0], [1.0 / 3.0, 1.0]]);
        let u = Matrix::from([[3.0, 1.0], [0.0, 1.0]]);
        let p = multiply(&l, &u);
        assert_eq!(p, Matrix::from([[3.0, 1.0], [1.0, 1.333]]));
    }

    #[test]
    fn test_multiply_identity() {
        let a = Matrix::from([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        assert_eq!(multiply(&Matrix::identity(3), &a), a);
        assert_eq!(multiply(&a, &Matrix::identity(3)), a);
    }

    #[test]
    fn test_try_multiply_mismatch() {
        let a = Matrix::identity(2);
        let b = Matrix::identity(3);
        assert!(matches!(
            try_multiply(&a, &b),
            Err(LuError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_approx_equal() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let near = Matrix::from([[1.0005, 2.0], [3.0, 3.9995]]);
        let far = Matrix::from([[1.01, 2.0], [3.0, 4.0]]);
        assert!(approx_equal(&a, &a, VERIFY_EPSILON));
        assert!(approx_equal(&near, &a, VERIFY_EPSILON));
        assert!(!approx_equal(&far, &a, VERIFY_EPSILON));
        assert!(!approx_equal(&Matrix::identity(3), &Matrix::identity(2), 1.0));
    }

    #[test]
    fn test_verify_reports_mismatch_without_error() {
        let a = Matrix::identity(2);
        let v = verify(&a, &Matrix::identity(3), &Matrix::identity(2));
        assert!(!v.is_correct);
        assert_eq!(v.message(), "The decomposition has some errors. A ≠ L × U");
    }

    #[test]
    fn test_verify_correct() {
        let a = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
        let l = Matrix::from([[1.0, 0.0], [1.5, 1.0]]);
        let u = Matrix::from([[4.0, 3.0], [0.0, -1.5]]);
        let v = verify(&a, &l, &u);
        assert!(v.is_correct);
        assert_eq!(v.product, a);
        assert_eq!(v.message(), "The decomposition is correct! A = L × U");
    }
}
