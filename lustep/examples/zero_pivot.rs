//! Show what happens when elimination meets a zero pivot
//!
//! Without pivoting the affected rows are skipped. L × U still reproduces A,
//! but U is left with entries below the diagonal, so the result is not a
//! true LU factorization.

use lustep::{decompose, render_result, Matrix, MatrixView, RenderConfig};

fn main() {
    let a = Matrix::from([[0.0, 1.0], [2.0, 3.0]]);
    let run = decompose(&a);

    println!("Skipped (pivot column, row) pairs: {:?}", run.skipped_pivots());
    println!("Recorded steps: {}", run.len());
    println!("U is upper triangular: {}", run.upper().is_upper_triangular(0.0));
    println!("\n{}", render_result(&run, &RenderConfig::default()));

    // Same rows swapped: the pivot is non-zero and U comes out triangular
    let swapped = Matrix::from([[2.0, 3.0], [0.0, 1.0]]);
    let run = decompose(&swapped);
    println!(
        "\nAfter swapping rows: {} (U upper triangular: {})",
        run.verify().message(),
        run.upper().is_upper_triangular(0.0)
    );
}
