//! Size and index checks for matrix input

use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::LuError;

/// Validate a matrix size chosen for input
///
/// Sizes outside `MIN_SIZE..=MAX_SIZE` are rejected. This is an input
/// convention; the decomposition itself accepts any square size.
pub const fn validate_size(size: usize) -> Result<usize, LuError> {
    if size < MIN_SIZE || size > MAX_SIZE {
        return Err(LuError::SizeOutOfRange { size });
    }
    Ok(size)
}

/// Validate a (row, col) position in a `size`×`size` matrix
pub const fn validate_index(row: usize, col: usize, size: usize) -> Result<(), LuError> {
    if row >= size || col >= size {
        return Err(LuError::IndexOutOfBounds { row, col, size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert_eq!(validate_size(2), Ok(2));
        assert_eq!(validate_size(5), Ok(5));
        assert_eq!(validate_size(1), Err(LuError::SizeOutOfRange { size: 1 }));
        assert_eq!(validate_size(6), Err(LuError::SizeOutOfRange { size: 6 }));
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 0, 2), Ok(()));
        assert_eq!(validate_index(1, 1, 2), Ok(()));
        assert_eq!(
            validate_index(2, 0, 2),
            Err(LuError::IndexOutOfBounds {
                row: 2,
                col: 0,
                size: 2
            })
        );
    }
}
