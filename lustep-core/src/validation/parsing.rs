//! Parsing of cell and whole-matrix text

use crate::fraction::parse_value;
use crate::{LuError, Matrix};

/// Parse the text of one cell
///
/// Empty (or whitespace-only) text means 0. Text that is not a number, a
/// decimal or an `n/d` fraction yields `None`, and the caller keeps the
/// previous value.
pub fn parse_cell(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return Some(0.0);
    }
    parse_value(text)
}

/// Parse a whole square matrix
///
/// Rows are separated by `;` or newlines, entries by whitespace or commas.
/// Entries that fail to parse are coerced to 0. Blank rows are ignored.
pub fn parse_matrix(text: &str) -> Result<Matrix, LuError> {
    let rows: Vec<Vec<f64>> = text
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(|cell| parse_cell(cell).unwrap_or(0.0))
                .collect()
        })
        .collect();

    let n = rows.len();
    if n == 0 {
        return Err(LuError::EmptyMatrix);
    }
    if let Some(bad) = rows.iter().find(|row| row.len() != n) {
        return Err(LuError::NotSquare {
            rows: n,
            cols: bad.len(),
        });
    }
    Matrix::square(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(""), Some(0.0));
        assert_eq!(parse_cell("   "), Some(0.0));
        assert_eq!(parse_cell("3"), Some(3.0));
        assert_eq!(parse_cell("-2.5"), Some(-2.5));
        assert_eq!(parse_cell("1/4"), Some(0.25));
        assert_eq!(parse_cell("abc"), None);
        assert_eq!(parse_cell("1/0"), None);
    }

    #[test]
    fn test_parse_matrix_separators() {
        let expected = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
        assert_eq!(parse_matrix("4 3; 6 3"), Ok(expected.clone()));
        assert_eq!(parse_matrix("4,3\n6,3\n"), Ok(expected.clone()));
        assert_eq!(parse_matrix("  4, 3 ;; 6 ,3 "), Ok(expected));
    }

    #[test]
    fn test_parse_matrix_coerces_bad_cells() {
        assert_eq!(
            parse_matrix("1 x; y 1"),
            Ok(Matrix::from([[1.0, 0.0], [0.0, 1.0]]))
        );
        assert_eq!(
            parse_matrix("1/2 1; 1 3/2"),
            Ok(Matrix::from([[0.5, 1.0], [1.0, 1.5]]))
        );
    }

    #[test]
    fn test_parse_matrix_rejects_bad_shape() {
        assert_eq!(parse_matrix(""), Err(LuError::EmptyMatrix));
        assert_eq!(parse_matrix(" ; "), Err(LuError::EmptyMatrix));
        assert_eq!(
            parse_matrix("1 2 3; 4 5 6"),
            Err(LuError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            parse_matrix("1 2; 3"),
            Err(LuError::NotSquare { rows: 2, cols: 1 })
        );
    }
}
