//! Conditional area reduction of roof coefficients.
//!
//! Only the tabulated `-1.30` coefficient is eligible. The gate is an exact
//! match within [`ANCHOR_EPSILON`], not a magnitude threshold: an
//! interpolated `-1.2999` is left alone.

use tracing::trace;
use xwind_core::math::axis::ANCHOR_EPSILON;

use crate::error::CoefficientError;
use crate::tables::reduction::AREA_REDUCTION;

/// The coefficient value eligible for area reduction.
pub const REDUCTION_SENTINEL: f64 = -1.30;

/// True when `cp` would be reduced for `plan_area`.
#[inline]
pub fn is_reducible(cp: f64, plan_area: Option<f64>) -> bool {
    matches!(plan_area, Some(area) if area > 0.0) && (cp - REDUCTION_SENTINEL).abs() < ANCHOR_EPSILON
}

/// Apply the area reduction to `cp` when eligible.
///
/// Returns the (possibly reduced) coefficient and the factor that was
/// applied, or `None` when the coefficient was not eligible. An eligible
/// coefficient over a small area reports `Some(1.0)`.
///
/// # Errors
///
/// * `InvalidGeometry` - `plan_area` is NaN
/// * `DataIntegrity` - the embedded reduction curve is malformed
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::area_reduction::reduce;
///
/// let (cp, factor) = reduce(-1.30, Some(600.0)).unwrap();
/// assert!((factor.unwrap() - 0.853333).abs() < 1e-6);
/// assert!((cp - (-1.109333)).abs() < 1e-6);
///
/// assert_eq!(reduce(-1.10, Some(500.0)).unwrap(), (-1.10, None));
/// assert_eq!(reduce(-1.30, None).unwrap(), (-1.30, None));
/// ```
pub fn reduce(cp: f64, plan_area: Option<f64>) -> Result<(f64, Option<f64>), CoefficientError> {
    if let Some(area) = plan_area {
        if area.is_nan() {
            return Err(CoefficientError::InvalidGeometry {
                parameter: "plan area",
                value: area,
            });
        }
    }

    match plan_area {
        Some(area) if is_reducible(cp, plan_area) => {
            let factor = AREA_REDUCTION
                .factor(area)
                .map_err(|e| CoefficientError::integrity("area reduction", e))?;
            trace!(cp, area, factor, "area reduction applied");
            Ok((cp * factor, Some(factor)))
        }
        _ => Ok((cp, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sentinel_reduced() {
        let (cp, factor) = reduce(-1.30, Some(600.0)).unwrap();
        let expected = 0.9 - 0.1 * 350.0 / 750.0;
        assert_relative_eq!(factor.unwrap(), expected, epsilon = 1e-12);
        assert_relative_eq!(cp, -1.30 * expected, epsilon = 1e-12);
    }

    #[test]
    fn test_small_area_reports_unit_factor() {
        assert_eq!(reduce(-1.30, Some(80.0)).unwrap(), (-1.30, Some(1.0)));
    }

    #[test]
    fn test_non_sentinel_untouched() {
        assert_eq!(reduce(-1.10, Some(500.0)).unwrap(), (-1.10, None));
        assert_eq!(reduce(-1.31, Some(500.0)).unwrap(), (-1.31, None));
        assert_eq!(reduce(-1.2999, Some(500.0)).unwrap(), (-1.2999, None));
    }

    #[test]
    fn test_sentinel_tolerance() {
        assert!(is_reducible(-1.30 + 1e-10, Some(500.0)));
        assert!(!is_reducible(-1.30 + 1e-8, Some(500.0)));
    }

    #[test]
    fn test_area_must_be_positive() {
        assert_eq!(reduce(-1.30, Some(0.0)).unwrap(), (-1.30, None));
        assert_eq!(reduce(-1.30, Some(-50.0)).unwrap(), (-1.30, None));
        assert_eq!(reduce(-1.30, None).unwrap(), (-1.30, None));
    }

    #[test]
    fn test_nan_area_rejected() {
        let err = reduce(-1.30, Some(f64::NAN)).unwrap_err();
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_huge_area_uses_last_factor() {
        let (cp, factor) = reduce(-1.30, Some(f64::INFINITY)).unwrap();
        assert_eq!(factor, Some(0.8));
        assert_relative_eq!(cp, -1.04, epsilon = 1e-12);
    }
}
