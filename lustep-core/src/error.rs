//! Error types for lustep operations

/// Errors that can occur while building or checking a decomposition
///
/// Elimination itself never fails: a zero pivot is skipped, not reported.
/// These variants cover the structural checks performed around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuError {
    /// Matrix has no rows
    EmptyMatrix,
    /// Matrix rows and columns differ, or a row has the wrong length
    NotSquare { rows: usize, cols: usize },
    /// Requested size is outside the supported range
    SizeOutOfRange { size: usize },
    /// Two matrices that must agree in shape do not
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Cell position outside the matrix
    IndexOutOfBounds { row: usize, col: usize, size: usize },
    /// Step index outside the recorded sequence
    StepOutOfRange { index: usize, len: usize },
    /// A view or step was requested before any decomposition ran
    NoDecomposition,
}

impl core::fmt::Display for LuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LuError::EmptyMatrix => write!(f, "Matrix is empty"),
            LuError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows} x {cols}")
            }
            LuError::SizeOutOfRange { size } => write!(
                f,
                "Matrix size {size} is outside the supported range {}..={}",
                crate::constants::MIN_SIZE,
                crate::constants::MAX_SIZE
            ),
            LuError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: expected {} x {}, got {} x {}",
                expected.0, expected.1, actual.0, actual.1
            ),
            LuError::IndexOutOfBounds { row, col, size } => write!(
                f,
                "Index ({row}, {col}) is out of bounds for a {size} x {size} matrix"
            ),
            LuError::StepOutOfRange { index, len } => {
                write!(f, "Step {index} is out of range for {len} recorded steps")
            }
            LuError::NoDecomposition => write!(f, "No decomposition has been run yet"),
        }
    }
}

impl std::error::Error for LuError {}

/// Result type for lustep operations
pub type Result<T> = core::result::Result<T, LuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(LuError::EmptyMatrix.to_string(), "Matrix is empty");
        assert_eq!(
            LuError::NotSquare { rows: 2, cols: 3 }.to_string(),
            "Matrix must be square, got 2 x 3"
        );
        assert_eq!(
            LuError::SizeOutOfRange { size: 7 }.to_string(),
            "Matrix size 7 is outside the supported range 2..=5"
        );
        assert_eq!(
            LuError::StepOutOfRange { index: 9, len: 4 }.to_string(),
            "Step 9 is out of range for 4 recorded steps"
        );
    }
}
