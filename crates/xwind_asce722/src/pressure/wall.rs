//! Wall external pressure coefficients.

use xwind_core::math::interpolators::{Interpolator, LinearInterpolator};
use xwind_core::types::SurfaceType;

use crate::error::{require_positive, CoefficientError};
use crate::tables::wall::{LEEWARD_WALL_CP, LEEWARD_WALL_RATIOS, SIDE_WALL_CP, WINDWARD_WALL_CP};

/// External pressure coefficient for a wall surface.
///
/// The leeward wall value depends on L/B, interpolated linearly between
/// L/B = 1, 2 and 4 and held flat outside that range.
///
/// # Arguments
///
/// * `length` - Horizontal dimension parallel to the wind (> 0)
/// * `width` - Horizontal dimension normal to the wind (> 0)
/// * `surface` - One of the three wall surfaces
///
/// # Errors
///
/// * `InvalidGeometry` - `length` or `width` is not positive
/// * `Unsupported` - `surface` is a roof surface or a parapet
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::wall::wall_cp;
/// use xwind_core::types::SurfaceType;
///
/// assert_eq!(wall_cp(60.0, 40.0, SurfaceType::WindwardWall).unwrap(), 0.8);
/// assert!((wall_cp(60.0, 40.0, SurfaceType::LeewardWall).unwrap() - (-0.4)).abs() < 1e-12);
/// ```
pub fn wall_cp(length: f64, width: f64, surface: SurfaceType) -> Result<f64, CoefficientError> {
    let length = require_positive("length", length)?;
    let width = require_positive("width", width)?;

    match surface {
        SurfaceType::WindwardWall => Ok(WINDWARD_WALL_CP),
        SurfaceType::SideWall => Ok(SIDE_WALL_CP),
        SurfaceType::LeewardWall => {
            let interp = LinearInterpolator::new(&LEEWARD_WALL_RATIOS, &LEEWARD_WALL_CP)
                .map_err(|e| CoefficientError::integrity("leeward wall", e))?;
            // Infinite L/B clamps like any other out-of-range ratio
            interp
                .interpolate_clamped(length / width)
                .map_err(|_| CoefficientError::InvalidGeometry {
                    parameter: "L/B",
                    value: length / width,
                })
        }
        SurfaceType::Parapet => Err(CoefficientError::Unsupported(
            "parapet pressure uses the combined coefficient GCpn, not Cp".to_string(),
        )),
        roof => Err(CoefficientError::Unsupported(format!(
            "{} is a roof surface; use the roof coefficient queries",
            roof
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_walls() {
        assert_eq!(wall_cp(10.0, 100.0, SurfaceType::WindwardWall).unwrap(), 0.8);
        assert_eq!(wall_cp(100.0, 10.0, SurfaceType::SideWall).unwrap(), -0.7);
    }

    #[test]
    fn test_leeward_anchors() {
        assert_eq!(wall_cp(50.0, 50.0, SurfaceType::LeewardWall).unwrap(), -0.5);
        assert_eq!(wall_cp(100.0, 50.0, SurfaceType::LeewardWall).unwrap(), -0.3);
        assert_eq!(wall_cp(200.0, 50.0, SurfaceType::LeewardWall).unwrap(), -0.2);
    }

    #[test]
    fn test_leeward_clamped_outside_range() {
        assert_eq!(wall_cp(20.0, 50.0, SurfaceType::LeewardWall).unwrap(), -0.5);
        assert_eq!(wall_cp(500.0, 50.0, SurfaceType::LeewardWall).unwrap(), -0.2);
    }

    #[test]
    fn test_leeward_interpolated() {
        assert_relative_eq!(
            wall_cp(150.0, 50.0, SurfaceType::LeewardWall).unwrap(),
            -0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bad_dimensions() {
        assert!(wall_cp(0.0, 10.0, SurfaceType::SideWall)
            .unwrap_err()
            .is_caller_error());
        assert!(wall_cp(10.0, -1.0, SurfaceType::SideWall)
            .unwrap_err()
            .is_caller_error());
    }

    #[test]
    fn test_non_wall_surfaces_unsupported() {
        for surface in SurfaceType::ALL.iter().filter(|s| !s.is_wall()) {
            assert!(matches!(
                wall_cp(10.0, 10.0, *surface),
                Err(CoefficientError::Unsupported(_))
            ));
        }
    }
}
