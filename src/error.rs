//! Error types for Trama operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Trama operations.
///
/// Provides detailed context about failures: zero-sized construction,
/// out-of-range cell access, and shape mismatches between grids.
///
/// # Examples
///
/// ```
/// use trama::error::TramaError;
///
/// let err = TramaError::DimensionMismatch {
///     expected: "5x7".to_string(),
///     actual: "2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone)]
pub enum TramaError {
    /// Grid constructed with a zero width or height.
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Cell access at or beyond the grid bounds.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid height (exclusive row bound)
        height: usize,
        /// Grid width (exclusive column bound)
        width: usize,
    },

    /// Grid shapes don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },
}

impl fmt::Display for TramaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TramaError::InvalidDimension { width, height } => {
                write!(
                    f,
                    "Invalid grid dimension: {width}x{height}, both sides must be positive"
                )
            }
            TramaError::IndexOutOfRange {
                row,
                col,
                height,
                width,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) out of range for a {height}-row, {width}-column grid"
                )
            }
            TramaError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Grid dimension mismatch: expected {expected}, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for TramaError {}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for TramaError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<TramaError> for &str {
    fn eq(&self, other: &TramaError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, TramaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = TramaError::InvalidDimension {
            width: 0,
            height: 7,
        };
        assert!(err.to_string().contains("Invalid grid dimension"));
        assert!(err.to_string().contains("0x7"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = TramaError::IndexOutOfRange {
            row: 9,
            col: 2,
            height: 5,
            width: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("(9, 2)"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = TramaError::DimensionMismatch {
            expected: "3x3".to_string(),
            actual: "2x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3x3"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = TramaError::DimensionMismatch {
            expected: "3x3".to_string(),
            actual: "2x2".to_string(),
        };
        assert_eq!(err, "Grid dimension mismatch: expected 3x3, got 2x2");
    }
}
