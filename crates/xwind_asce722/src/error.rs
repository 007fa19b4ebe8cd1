//! Error type for coefficient and wind-load queries.

use thiserror::Error;
use tracing::error;
use xwind_core::types::InterpolationError;

/// Coefficient query errors.
///
/// # Variants
///
/// - `InvalidGeometry`: a caller-supplied quantity is out of its valid range
/// - `DataIntegrity`: an embedded table is malformed (fatal)
/// - `Unsupported`: the tables do not cover the requested case
///
/// # Examples
///
/// ```
/// use xwind_asce722::CoefficientError;
///
/// let err = CoefficientError::InvalidGeometry { parameter: "length", value: -1.0 };
/// assert!(err.is_caller_error());
/// assert_eq!(format!("{}", err), "Invalid geometry: length = -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoefficientError {
    /// A geometric or site input is non-positive, non-finite or out of range.
    #[error("Invalid geometry: {parameter} = {value}")]
    InvalidGeometry {
        /// Name of the offending input
        parameter: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// An embedded table violates its structural invariants.
    #[error("Data integrity violation in table '{table}': {source}")]
    DataIntegrity {
        /// Name of the malformed table
        table: &'static str,
        /// Underlying interpolation failure
        #[source]
        source: InterpolationError,
    },

    /// The requested surface, structure or flexibility is not tabulated.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl CoefficientError {
    /// True when the error reflects malformed embedded data.
    #[inline]
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, CoefficientError::DataIntegrity { .. })
    }

    /// True when the error was caused by the caller's input.
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, CoefficientError::InvalidGeometry { .. })
    }

    /// Wrap a table failure as a data-integrity error, logging it first.
    pub(crate) fn integrity(table: &'static str, source: InterpolationError) -> Self {
        error!(table, %source, "embedded coefficient table is malformed");
        CoefficientError::DataIntegrity { table, source }
    }
}

/// Require `value > 0` (which also rejects NaN).
pub(crate) fn require_positive(
    parameter: &'static str,
    value: f64,
) -> Result<f64, CoefficientError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CoefficientError::InvalidGeometry { parameter, value })
    }
}

/// Reject NaN; infinities are left to domain clamping.
pub(crate) fn require_number(
    parameter: &'static str,
    value: f64,
) -> Result<f64, CoefficientError> {
    if value.is_nan() {
        Err(CoefficientError::InvalidGeometry { parameter, value })
    } else {
        Ok(value)
    }
}
