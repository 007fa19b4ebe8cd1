//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from anchor tables, axis resolution and interpolation
//! - `CategoryError`: Errors from parsing classification names

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough anchors for interpolation
/// - `NonMonotonicData`: Anchors are not strictly ascending
/// - `MissingCell`: A grid row does not define a column the grid advertises
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use xwind_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
///
/// let err = InterpolationError::MissingCell { row: 0.5, column: 15.0 };
/// assert_eq!(format!("{}", err), "No grid cell at row 0.5, column 15");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient anchors for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Anchors are not strictly ascending.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// A row of a two-axis grid has no entry for a column anchor.
    #[error("No grid cell at row {row}, column {column}")]
    MissingCell {
        /// Row anchor of the incomplete row
        row: f64,
        /// Column anchor that was not found
        column: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised when parsing a classification from text.
///
/// # Examples
/// ```
/// use xwind_core::types::{CategoryError, ExposureCategory};
///
/// let result: Result<ExposureCategory, _> = "E".parse();
/// assert_eq!(
///     result.unwrap_err(),
///     CategoryError::Unknown { kind: "exposure category", value: "E".to_string() }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// The text does not name any variant of the classification.
    #[error("Unknown {kind}: {value}")]
    Unknown {
        /// Classification being parsed
        kind: &'static str,
        /// Text that failed to parse
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = InterpolationError::OutOfBounds {
            x: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            format!("{}", err),
            "Query point 5 outside valid domain [0, 3]"
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = InterpolationError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 1, need at least 2"
        );
    }

    #[test]
    fn test_non_monotonic_display() {
        let err = InterpolationError::NonMonotonicData { index: 3 };
        assert_eq!(format!("{}", err), "Data is not monotonic at index 3");
    }

    #[test]
    fn test_missing_cell_display() {
        let err = InterpolationError::MissingCell {
            row: 0.25,
            column: 45.0,
        };
        assert_eq!(format!("{}", err), "No grid cell at row 0.25, column 45");
    }

    #[test]
    fn test_category_error_display() {
        let err = CategoryError::Unknown {
            kind: "enclosure type",
            value: "tent".to_string(),
        };
        assert_eq!(format!("{}", err), "Unknown enclosure type: tent");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InterpolationError::InvalidInput("bad".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
