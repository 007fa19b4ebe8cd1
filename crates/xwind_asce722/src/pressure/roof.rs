//! Roof external pressure coefficients.
//!
//! Three queries cover the roof cases of the directional procedure:
//!
//! - [`windward_roof_cp`]: windward slope, wind normal to ridge (two values)
//! - [`leeward_cp`]: leeward slope, wind normal to ridge
//!
//! The `_with_factor` variants also return the reduction factor applied.
//! - [`parallel_to_ridge`]: every roof zone for wind parallel to the ridge
//!
//! h/L and angle are clamped into each table's domain rather than
//! rejected. Each query takes an optional plan area; see
//! [`area_reduction`](super::area_reduction) for when it applies. Only the
//! primary coefficient is ever reduced.

use tracing::trace;
use xwind_core::math::interpolators::BilinearInterpolator;

use super::area_reduction::reduce;
use super::log_clamps;
use crate::error::{require_number, require_positive, CoefficientError};
use crate::tables::roof::{CpPair, LEEWARD_CP, PARALLEL_TO_RIDGE_ZONES, WINDWARD_CP, ZONE_COUNT};

/// Coefficients of one parallel-to-ridge roof zone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZoneCp {
    /// Zone label, e.g. `"0 to h/2"`
    pub zone: &'static str,
    /// Primary coefficient, after any area reduction
    pub cp1: f64,
    /// Alternate coefficient, never reduced
    pub cp2: f64,
    /// Reduction factor applied to `cp1`, `None` when not eligible
    pub reduction_factor: Option<f64>,
}

/// Windward roof coefficients for a building of plan `length` and mean roof `height`.
///
/// h/L is `height / length`.
///
/// # Arguments
///
/// * `length` - Horizontal dimension parallel to the wind (> 0)
/// * `height` - Mean roof height (> 0), same unit as `length`
/// * `angle` - Roof angle in degrees
/// * `plan_area` - Optional tributary plan area in ft²
///
/// # Errors
///
/// * `InvalidGeometry` - `length` or `height` is not positive, or an input is NaN
/// * `DataIntegrity` - the embedded table is malformed
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::roof::windward_roof_cp;
///
/// // h/L = 1.0 at 10 degrees is the -1.30 entry, which a 600 ft² area reduces
/// let cp = windward_roof_cp(30.0, 30.0, 10.0, Some(600.0)).unwrap();
/// assert!((cp.cp1 - (-1.109333)).abs() < 1e-6);
/// assert_eq!(cp.cp2, -0.18);
/// ```
pub fn windward_roof_cp(
    length: f64,
    height: f64,
    angle: f64,
    plan_area: Option<f64>,
) -> Result<CpPair, CoefficientError> {
    windward_roof_cp_with_factor(length, height, angle, plan_area).map(|(cp, _)| cp)
}

/// [`windward_roof_cp`] together with the reduction factor applied to `Cp1`.
///
/// The factor is `None` when `Cp1` was not eligible for reduction.
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::roof::windward_roof_cp_with_factor;
///
/// let (cp, factor) = windward_roof_cp_with_factor(30.0, 30.0, 10.0, Some(250.0)).unwrap();
/// assert_eq!(factor, Some(0.9));
/// assert!((cp.cp1 - (-1.17)).abs() < 1e-12);
/// ```
pub fn windward_roof_cp_with_factor(
    length: f64,
    height: f64,
    angle: f64,
    plan_area: Option<f64>,
) -> Result<(CpPair, Option<f64>), CoefficientError> {
    let length = require_positive("length", length)?;
    let height = require_positive("height", height)?;
    let angle = require_number("angle", angle)?;
    let h_over_l = require_number("h/L", height / length)?;

    log_clamps(&WINDWARD_CP, h_over_l, angle);

    let raw = BilinearInterpolator::new(&WINDWARD_CP)
        .interpolate(h_over_l, angle)
        .map_err(|e| CoefficientError::integrity(WINDWARD_CP.name(), e))?;
    let (cp1, factor) = reduce(raw.cp1, plan_area)?;

    trace!(h_over_l, angle, cp1, cp2 = raw.cp2, ?factor, "windward roof");
    Ok((CpPair::new(cp1, raw.cp2), factor))
}

/// Leeward roof coefficient at `h_over_l` and `angle` (degrees).
///
/// # Errors
///
/// * `InvalidGeometry` - an input is NaN
/// * `DataIntegrity` - the embedded table is malformed
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::roof::leeward_cp;
///
/// assert_eq!(leeward_cp(0.25, 10.0, None).unwrap(), -0.3);
/// // Roofs steeper than 20 degrees use the 20 degree column
/// assert_eq!(leeward_cp(1.0, 35.0, None).unwrap(), -0.6);
/// ```
pub fn leeward_cp(h_over_l: f64, angle: f64, plan_area: Option<f64>) -> Result<f64, CoefficientError> {
    leeward_cp_with_factor(h_over_l, angle, plan_area).map(|(cp, _)| cp)
}

/// [`leeward_cp`] together with the reduction factor, `None` when not eligible.
pub fn leeward_cp_with_factor(
    h_over_l: f64,
    angle: f64,
    plan_area: Option<f64>,
) -> Result<(f64, Option<f64>), CoefficientError> {
    let h_over_l = require_number("h/L", h_over_l)?;
    let angle = require_number("angle", angle)?;

    log_clamps(&LEEWARD_CP, h_over_l, angle);

    let raw = BilinearInterpolator::new(&LEEWARD_CP)
        .interpolate(h_over_l, angle)
        .map_err(|e| CoefficientError::integrity(LEEWARD_CP.name(), e))?;
    let (cp, factor) = reduce(raw, plan_area)?;

    trace!(h_over_l, angle, cp, ?factor, "leeward roof");
    Ok((cp, factor))
}

/// Coefficients of every roof zone for wind parallel to the ridge.
///
/// Zones are returned windward edge first. Each zone's `Cp1` is flat below
/// h/L = 0.5 and above h/L = 1.0 and linear between.
///
/// # Errors
///
/// * `InvalidGeometry` - `h_over_l` or `plan_area` is NaN
/// * `DataIntegrity` - the embedded reduction curve is malformed
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::roof::parallel_to_ridge;
///
/// let zones = parallel_to_ridge(0.75, Some(500.0)).unwrap();
/// assert_eq!(zones[0].zone, "0 to h/2");
/// assert!((zones[0].cp1 - (-1.10)).abs() < 1e-12);
/// assert_eq!(zones[0].reduction_factor, None);
/// ```
pub fn parallel_to_ridge(
    h_over_l: f64,
    plan_area: Option<f64>,
) -> Result<[ZoneCp; ZONE_COUNT], CoefficientError> {
    let h_over_l = require_number("h/L", h_over_l)?;

    let mut zones = [ZoneCp::default(); ZONE_COUNT];
    for (slot, record) in zones.iter_mut().zip(PARALLEL_TO_RIDGE_ZONES.iter()) {
        let (cp1, reduction_factor) = reduce(record.cp_at(h_over_l), plan_area)?;
        *slot = ZoneCp {
            zone: record.label,
            cp1,
            cp2: record.cp_alternate,
            reduction_factor,
        };
    }

    trace!(h_over_l, ?plan_area, "parallel to ridge");
    Ok(zones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_windward_anchor_is_exact() {
        let cp = windward_roof_cp(40.0, 10.0, 10.0, None).unwrap();
        assert_eq!(cp, CpPair::new(-0.7, -0.18));
    }

    #[test]
    fn test_windward_ratio_midpoint() {
        let cp = windward_roof_cp(80.0, 30.0, 10.0, None).unwrap();
        assert_relative_eq!(cp.cp1, -0.8, epsilon = 1e-12);
        assert_relative_eq!(cp.cp2, -0.18, epsilon = 1e-12);
    }

    #[test]
    fn test_windward_bilinear() {
        // h/L = 0.75, angle 12.5: corners -0.9, -0.7 (h/L 0.5) and -1.3, -1.0 (h/L 1.0)
        let cp = windward_roof_cp(40.0, 30.0, 12.5, None).unwrap();
        let at_10 = 0.5 * (-0.9) + 0.5 * (-1.3);
        let at_15 = 0.5 * (-0.7) + 0.5 * (-1.0);
        assert_relative_eq!(cp.cp1, 0.5 * at_10 + 0.5 * at_15, epsilon = 1e-12);
        assert_relative_eq!(cp.cp2, -0.18, epsilon = 1e-12);
    }

    #[test]
    fn test_windward_rejects_bad_geometry() {
        for (length, height) in [(0.0, 10.0), (-5.0, 10.0), (40.0, 0.0), (40.0, -1.0)] {
            let err = windward_roof_cp(length, height, 20.0, None).unwrap_err();
            assert!(err.is_caller_error(), "({}, {}) gave {:?}", length, height, err);
        }
        assert!(windward_roof_cp(40.0, 10.0, f64::NAN, None)
            .unwrap_err()
            .is_caller_error());
        assert!(windward_roof_cp(f64::INFINITY, f64::INFINITY, 20.0, None)
            .unwrap_err()
            .is_caller_error());
    }

    #[test]
    fn test_windward_reduces_only_sentinel() {
        // h/L = 1.0, 10 degrees is -1.3; at 15 degrees it is -1.0
        let reduced = windward_roof_cp(30.0, 30.0, 10.0, Some(1000.0)).unwrap();
        assert_relative_eq!(reduced.cp1, -1.04, epsilon = 1e-12);
        assert_eq!(reduced.cp2, -0.18);

        let untouched = windward_roof_cp(30.0, 30.0, 15.0, Some(1000.0)).unwrap();
        assert_eq!(untouched.cp1, -1.0);
    }

    #[test]
    fn test_windward_reports_factor() {
        let (cp, factor) = windward_roof_cp_with_factor(30.0, 30.0, 10.0, Some(600.0)).unwrap();
        assert_relative_eq!(factor.unwrap(), 0.9 - 0.1 * 350.0 / 750.0, epsilon = 1e-12);
        assert_eq!(cp, windward_roof_cp(30.0, 30.0, 10.0, Some(600.0)).unwrap());

        let (_, small) = windward_roof_cp_with_factor(30.0, 30.0, 10.0, Some(50.0)).unwrap();
        assert_eq!(small, Some(1.0));

        let (_, ineligible) = windward_roof_cp_with_factor(30.0, 30.0, 15.0, Some(600.0)).unwrap();
        assert_eq!(ineligible, None);
    }

    #[test]
    fn test_leeward_reports_no_factor() {
        let (cp, factor) = leeward_cp_with_factor(1.0, 10.0, Some(800.0)).unwrap();
        assert_eq!(cp, -0.7);
        assert_eq!(factor, None);
    }

    #[test]
    fn test_windward_clamps_angle() {
        assert_eq!(
            windward_roof_cp(40.0, 20.0, 95.0, None).unwrap(),
            windward_roof_cp(40.0, 20.0, 90.0, None).unwrap()
        );
        assert_eq!(
            windward_roof_cp(40.0, 20.0, 5.0, None).unwrap(),
            windward_roof_cp(40.0, 20.0, 10.0, None).unwrap()
        );
    }

    #[test]
    fn test_leeward_angle_midpoint() {
        assert_relative_eq!(leeward_cp(0.5, 17.5, None).unwrap(), -0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_leeward_clamps_ratio() {
        assert_eq!(leeward_cp(0.1, 15.0, None).unwrap(), -0.5);
        assert_eq!(leeward_cp(3.0, 10.0, None).unwrap(), -0.7);
    }

    #[test]
    fn test_leeward_area_has_no_effect() {
        assert_eq!(
            leeward_cp(1.0, 10.0, Some(800.0)).unwrap(),
            leeward_cp(1.0, 10.0, None).unwrap()
        );
    }

    #[test]
    fn test_leeward_rejects_nan() {
        assert!(leeward_cp(f64::NAN, 10.0, None).unwrap_err().is_caller_error());
        assert!(leeward_cp(0.5, f64::NAN, None).unwrap_err().is_caller_error());
    }

    #[test]
    fn test_parallel_low_ratio() {
        let zones = parallel_to_ridge(0.3, None).unwrap();
        let cp1: Vec<f64> = zones.iter().map(|z| z.cp1).collect();
        assert_eq!(cp1, vec![-0.9, -0.9, -0.5, -0.3]);
        assert!(zones.iter().all(|z| z.cp2 == -0.18 && z.reduction_factor.is_none()));
    }

    #[test]
    fn test_parallel_high_ratio_reduces_first_zone() {
        let zones = parallel_to_ridge(1.5, Some(250.0)).unwrap();
        assert_eq!(zones[0].reduction_factor, Some(0.9));
        assert_relative_eq!(zones[0].cp1, -1.17, epsilon = 1e-12);
        assert_eq!(zones[0].cp2, -0.18);
        for zone in &zones[1..] {
            assert_eq!(zone.cp1, -0.7);
            assert_eq!(zone.reduction_factor, None);
        }
    }

    #[test]
    fn test_parallel_midpoint_not_reduced() {
        let zones = parallel_to_ridge(0.75, Some(500.0)).unwrap();
        assert_relative_eq!(zones[0].cp1, -1.10, epsilon = 1e-12);
        assert_eq!(zones[0].reduction_factor, None);
        assert_relative_eq!(zones[1].cp1, -0.8, epsilon = 1e-12);
        assert_relative_eq!(zones[2].cp1, -0.6, epsilon = 1e-12);
        assert_relative_eq!(zones[3].cp1, -0.5, epsilon = 1e-12);
    }
}
