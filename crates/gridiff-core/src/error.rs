//! Error types for the gridiff workspace.
//!
//! Split by concern: [`GridError`] for field construction, [`DiffError`]
//! for derivative-operator preconditions. Both are plain data and
//! implement [`std::error::Error`].

use std::error::Error;
use std::fmt;

use crate::field::Shape;

/// Errors arising from [`GridField`](crate::GridField) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// The flat sample buffer does not hold `rows * cols` values.
    LengthMismatch {
        /// `rows * cols` for the requested shape.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A nested row has a different length from the first row.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "sample buffer has {actual} values, shape requires {expected}")
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} columns, expected {expected}"),
        }
    }
}

impl Error for GridError {}

/// Precondition violations reported by the difference operators.
///
/// Every variant is deterministic: retrying with the same inputs fails
/// the same way. No partial output is produced when one is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffError {
    /// Axis selector outside `{0, 1}`.
    InvalidAxis {
        /// The rejected selector.
        value: usize,
    },
    /// Too few points along the differencing axis for the scheme.
    GridTooSmall {
        /// Scheme name (`"forward"`, `"backward"`, `"centered"`).
        scheme: &'static str,
        /// Axis index (0 = columns, 1 = rows).
        axis: usize,
        /// Minimum number of points the scheme needs.
        required: usize,
        /// Points actually present along the axis.
        actual: usize,
    },
    /// Step size is zero, negative, or NaN.
    NonPositiveStepSize {
        /// The rejected step size.
        value: f64,
    },
    /// Step size is infinite.
    NonFiniteStepSize {
        /// The rejected step size.
        value: f64,
    },
    /// Two fields that must share a shape do not.
    ShapeMismatch {
        /// Shape of the reference (input) field.
        expected: Shape,
        /// Shape of the offending field.
        actual: Shape,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxis { value } => write!(f, "axis {value} is not 0 (x) or 1 (y)"),
            Self::GridTooSmall {
                scheme,
                axis,
                required,
                actual,
            } => write!(
                f,
                "{scheme} difference needs {required} points along axis {axis}, grid has {actual}"
            ),
            Self::NonPositiveStepSize { value } => {
                write!(f, "step size must be positive, got {value}")
            }
            Self::NonFiniteStepSize { value } => {
                write!(f, "step size must be finite, got {value}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl Error for DiffError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_offending_values() {
        let err = DiffError::GridTooSmall {
            scheme: "centered",
            axis: 0,
            required: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("centered"), "{msg}");
        assert!(msg.contains('3') && msg.contains('2'), "{msg}");

        let err = DiffError::ShapeMismatch {
            expected: (2, 3),
            actual: (3, 2),
        };
        assert_eq!(err.to_string(), "shape mismatch: expected 2x3, got 3x2");

        let err = GridError::RaggedRows {
            row: 2,
            expected: 4,
            actual: 1,
        };
        assert_eq!(err.to_string(), "row 2 has 1 columns, expected 4");
    }
}
