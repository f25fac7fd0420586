//! Built-in example matrices

use crate::Matrix;

/// Tridiagonal matrix with `diag` on the diagonal and `off` beside it
pub fn tridiagonal(n: usize, diag: f64, off: f64) -> Matrix {
    Matrix::from_fn(n, |i, j| {
        if i == j {
            diag
        } else if i.abs_diff(j) == 1 {
            off
        } else {
            0.0
        }
    })
}

/// Example matrix offered for each input size
///
/// All of them decompose without hitting a zero pivot.
pub fn example_matrix(n: usize) -> Matrix {
    match n {
        2 => Matrix::from([[4.0, 3.0], [6.0, 3.0]]),
        3 => tridiagonal(3, 2.0, -1.0),
        _ => tridiagonal(n, 4.0, -1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose;

    #[test]
    fn test_examples() {
        assert_eq!(
            example_matrix(3),
            Matrix::from([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]])
        );
        assert_eq!(
            example_matrix(4),
            Matrix::from([
                [4.0, -1.0, 0.0, 0.0],
                [-1.0, 4.0, -1.0, 0.0],
                [0.0, -1.0, 4.0, -1.0],
                [0.0, 0.0, -1.0, 4.0],
            ])
        );
        assert_eq!(example_matrix(5).get(4, 4), 4.0);
        assert_eq!(example_matrix(5).get(0, 2), 0.0);
    }

    #[test]
    fn test_examples_decompose_cleanly() {
        for n in 2..=5 {
            let d = decompose(&example_matrix(n));
            assert!(d.skipped_pivots().is_empty());
            assert!(d.verify().is_correct);
        }
    }
}
