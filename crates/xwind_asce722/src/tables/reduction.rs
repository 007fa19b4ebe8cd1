//! Area reduction curve for roof coefficients.
//!
//! Tributary plan areas larger than 100 ft² may reduce the most negative
//! roof coefficient. The reduction factor falls linearly through three
//! breakpoints and is flat outside them.

use xwind_core::math::interpolators::{Interpolator, LinearInterpolator};
use xwind_core::types::InterpolationError;

/// Three-breakpoint piecewise-linear map from plan area to reduction factor.
///
/// # Invariants
///
/// - Areas strictly increasing
/// - Factors non-increasing, each at most 1.0
///
/// Checked by [`validate`](Self::validate); the embedded curve is checked
/// in the table tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReductionCurve {
    areas: [f64; 3],
    factors: [f64; 3],
}

impl ReductionCurve {
    /// Create a curve from `(area, factor)` breakpoints.
    pub const fn new(breakpoints: [(f64, f64); 3]) -> Self {
        Self {
            areas: [breakpoints[0].0, breakpoints[1].0, breakpoints[2].0],
            factors: [breakpoints[0].1, breakpoints[1].1, breakpoints[2].1],
        }
    }

    /// Breakpoint areas, ascending.
    pub fn areas(&self) -> &[f64; 3] {
        &self.areas
    }

    /// Breakpoint factors.
    pub fn factors(&self) -> &[f64; 3] {
        &self.factors
    }

    /// Check the breakpoint invariants.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        self.interpolator()?;

        for (i, pair) in self.factors.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(InterpolationError::InvalidInput(format!(
                    "reduction factor increases at breakpoint {}",
                    i + 1
                )));
            }
        }

        if let Some(f) = self.factors.iter().find(|f| **f > 1.0) {
            return Err(InterpolationError::InvalidInput(format!(
                "reduction factor {} exceeds 1.0",
                f
            )));
        }

        Ok(())
    }

    /// Reduction factor at `area`.
    ///
    /// Areas at or below the first breakpoint give the first factor; at or
    /// above the last, the last factor.
    ///
    /// # Example
    ///
    /// ```
    /// use xwind_asce722::tables::reduction::AREA_REDUCTION;
    ///
    /// assert_eq!(AREA_REDUCTION.factor(50.0).unwrap(), 1.0);
    /// assert_eq!(AREA_REDUCTION.factor(250.0).unwrap(), 0.9);
    /// assert_eq!(AREA_REDUCTION.factor(5000.0).unwrap(), 0.8);
    /// ```
    pub fn factor(&self, area: f64) -> Result<f64, InterpolationError> {
        self.interpolator()?.interpolate_clamped(area)
    }

    fn interpolator(&self) -> Result<LinearInterpolator<'_, f64>, InterpolationError> {
        LinearInterpolator::new(&self.areas, &self.factors)
    }
}

/// Roof area reduction: 1.0 at ≤ 100 ft², 0.9 at 250 ft², 0.8 at ≥ 1000 ft².
pub static AREA_REDUCTION: ReductionCurve =
    ReductionCurve::new([(100.0, 1.00), (250.0, 0.90), (1000.0, 0.80)]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_embedded_curve_is_valid() {
        assert!(AREA_REDUCTION.validate().is_ok());
    }

    #[test]
    fn test_breakpoints_are_exact() {
        assert_eq!(AREA_REDUCTION.factor(100.0).unwrap(), 1.0);
        assert_eq!(AREA_REDUCTION.factor(250.0).unwrap(), 0.9);
        assert_eq!(AREA_REDUCTION.factor(1000.0).unwrap(), 0.8);
    }

    #[test]
    fn test_segments() {
        assert_relative_eq!(AREA_REDUCTION.factor(175.0).unwrap(), 0.95, epsilon = 1e-12);
        assert_relative_eq!(
            AREA_REDUCTION.factor(600.0).unwrap(),
            0.9 - 0.1 * 350.0 / 750.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_validate_rejects_increasing_factor() {
        let curve = ReductionCurve::new([(100.0, 0.9), (250.0, 1.0), (1000.0, 0.8)]);
        assert!(matches!(
            curve.validate(),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_amplifying_factor() {
        let curve = ReductionCurve::new([(100.0, 1.2), (250.0, 1.1), (1000.0, 1.0)]);
        assert!(curve.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unsorted_areas() {
        let curve = ReductionCurve::new([(250.0, 1.0), (100.0, 0.9), (1000.0, 0.8)]);
        assert_eq!(
            curve.validate(),
            Err(InterpolationError::NonMonotonicData { index: 1 })
        );
        assert!(curve.factor(500.0).is_err());
    }
}
