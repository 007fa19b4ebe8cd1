//! Design wind pressure, ASCE 7-22 Chapter 27 directional procedure.
//!
//! ```text
//! p = q G Cp - qi (±GCpi)          (Eq. 27.3-1)
//! ```
//!
//! `q` is `qz` on the windward wall and `qh` elsewhere; `qi` is taken as
//! `qh` for every surface.

use xwind_core::types::{EnclosureType, ExposureCategory, StructureFlexibility, SurfaceType};

use crate::error::{require_positive, CoefficientError};
use crate::parameters::gust::g;
use crate::pressure::internal::gcpi;
use crate::pressure::roof::{leeward_cp, windward_roof_cp};
use crate::pressure::velocity::qz;
use crate::pressure::wall::wall_cp;

/// Design pressures for one surface, with positive and negative internal pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DesignPressure {
    /// External pressure coefficient used
    pub cp: f64,
    /// Pressure with +GCpi (psf)
    pub positive_internal: f64,
    /// Pressure with -GCpi (psf)
    pub negative_internal: f64,
}

/// `(p with +GCpi, p with -GCpi)`.
///
/// # Example
///
/// ```
/// use xwind_asce722::procedure::design_pressure;
///
/// let (pos, neg) = design_pressure(30.0, 0.85, 0.8, 30.0, (0.18, -0.18));
/// assert!((pos - 15.0).abs() < 1e-9);
/// assert!((neg - 25.8).abs() < 1e-9);
/// ```
#[inline]
pub fn design_pressure(q: f64, g: f64, cp: f64, qi: f64, gcpi: (f64, f64)) -> (f64, f64) {
    let external = q * g * cp;
    (external - qi * gcpi.0, external - qi * gcpi.1)
}

/// Resolved inputs of a building for the directional procedure.
///
/// Lengths are in feet, speed in mph and the roof angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindInput {
    /// Basic wind speed V
    pub speed: f64,
    /// Exposure coefficient at the height of interest on the windward wall
    pub kz: f64,
    /// Exposure coefficient at mean roof height
    pub kh: f64,
    /// Topographic factor
    pub kzt: f64,
    /// Ground elevation factor
    pub ke: f64,
    /// Exposure category
    pub exposure: ExposureCategory,
    /// Enclosure classification
    pub enclosure: EnclosureType,
    /// Dynamic response class
    pub flexibility: StructureFlexibility,
    /// Mean roof height h
    pub mean_roof_height: f64,
    /// Plan dimension normal to the wind, B
    pub width: f64,
    /// Plan dimension parallel to the wind, L
    pub length: f64,
    /// Roof angle θ
    pub roof_angle: f64,
}

/// A method that turns building inputs into design pressures for a surface.
pub trait WindLoadProcedure {
    /// Design pressure on `surface`.
    fn calculate_pressure(
        &self,
        input: &WindInput,
        surface: SurfaceType,
    ) -> Result<DesignPressure, CoefficientError>;
}

/// Chapter 27 directional procedure for enclosed and partially enclosed buildings.
///
/// The windward roof uses the primary coefficient `Cp1`. Wind parallel to
/// the ridge varies by zone, so that surface is reported as unsupported;
/// combine [`parallel_to_ridge`](crate::pressure::roof::parallel_to_ridge)
/// with [`design_pressure`] per zone instead.
///
/// # Example
///
/// ```
/// use xwind_asce722::procedure::{DirectionalProcedure, WindInput, WindLoadProcedure};
/// use xwind_core::types::{EnclosureType, ExposureCategory, StructureFlexibility, SurfaceType};
///
/// let input = WindInput {
///     speed: 115.0,
///     kz: 0.98,
///     kh: 0.98,
///     kzt: 1.0,
///     ke: 1.0,
///     exposure: ExposureCategory::C,
///     enclosure: EnclosureType::Enclosed,
///     flexibility: StructureFlexibility::Rigid,
///     mean_roof_height: 30.0,
///     width: 100.0,
///     length: 60.0,
///     roof_angle: 20.0,
/// };
///
/// let p = DirectionalProcedure.calculate_pressure(&input, SurfaceType::SideWall).unwrap();
/// assert_eq!(p.cp, -0.7);
/// assert!(p.negative_internal > p.positive_internal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalProcedure;

impl WindLoadProcedure for DirectionalProcedure {
    fn calculate_pressure(
        &self,
        input: &WindInput,
        surface: SurfaceType,
    ) -> Result<DesignPressure, CoefficientError> {
        let height = require_positive("mean roof height", input.mean_roof_height)?;

        let cp = match surface {
            SurfaceType::RoofWindward => {
                windward_roof_cp(input.length, height, input.roof_angle, None)?.cp1
            }
            SurfaceType::RoofLeeward => {
                let length = require_positive("length", input.length)?;
                leeward_cp(height / length, input.roof_angle, None)?
            }
            SurfaceType::RoofParallelToRidge => {
                return Err(CoefficientError::Unsupported(
                    "wind parallel to ridge varies by zone; evaluate each zone".to_string(),
                ))
            }
            wall => wall_cp(input.length, input.width, wall)?,
        };

        let qh = qz(input.speed, input.kh, input.kzt, input.ke);
        let q = match surface {
            SurfaceType::WindwardWall => qz(input.speed, input.kz, input.kzt, input.ke),
            _ => qh,
        };
        let gust = g(input.flexibility)?;

        let (positive_internal, negative_internal) =
            design_pressure(q, gust, cp, qh, gcpi(input.enclosure));

        Ok(DesignPressure {
            cp,
            positive_internal,
            negative_internal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn building() -> WindInput {
        WindInput {
            speed: 100.0,
            kz: 0.9,
            kh: 1.0,
            kzt: 1.0,
            ke: 1.0,
            exposure: ExposureCategory::C,
            enclosure: EnclosureType::Enclosed,
            flexibility: StructureFlexibility::Rigid,
            mean_roof_height: 30.0,
            width: 60.0,
            length: 120.0,
            roof_angle: 10.0,
        }
    }

    #[test]
    fn test_design_pressure_formula() {
        let (pos, neg) = design_pressure(20.0, 0.85, -0.7, 25.0, (0.55, -0.55));
        assert_relative_eq!(pos, 20.0 * 0.85 * -0.7 - 25.0 * 0.55, epsilon = 1e-12);
        assert_relative_eq!(neg, 20.0 * 0.85 * -0.7 + 25.0 * 0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_windward_wall_uses_qz() {
        let p = DirectionalProcedure
            .calculate_pressure(&building(), SurfaceType::WindwardWall)
            .unwrap();
        let qz = 0.00256 * 0.9 * 100.0 * 100.0;
        let qh = 0.00256 * 100.0 * 100.0;
        assert_eq!(p.cp, 0.8);
        assert_relative_eq!(p.positive_internal, qz * 0.85 * 0.8 - qh * 0.18, epsilon = 1e-9);
        assert_relative_eq!(p.negative_internal, qz * 0.85 * 0.8 + qh * 0.18, epsilon = 1e-9);
    }

    #[test]
    fn test_leeward_wall_uses_ratio() {
        // L/B = 2
        let p = DirectionalProcedure
            .calculate_pressure(&building(), SurfaceType::LeewardWall)
            .unwrap();
        assert_eq!(p.cp, -0.3);
    }

    #[test]
    fn test_roof_surfaces() {
        // h/L = 0.25 at 10 degrees
        let windward = DirectionalProcedure
            .calculate_pressure(&building(), SurfaceType::RoofWindward)
            .unwrap();
        assert_eq!(windward.cp, -0.7);

        let leeward = DirectionalProcedure
            .calculate_pressure(&building(), SurfaceType::RoofLeeward)
            .unwrap();
        assert_eq!(leeward.cp, -0.3);
    }

    #[test]
    fn test_unsupported_surfaces() {
        for surface in [SurfaceType::RoofParallelToRidge, SurfaceType::Parapet] {
            assert!(matches!(
                DirectionalProcedure.calculate_pressure(&building(), surface),
                Err(CoefficientError::Unsupported(_))
            ));
        }
    }

    #[test]
    fn test_flexible_unsupported() {
        let input = WindInput {
            flexibility: StructureFlexibility::Flexible,
            ..building()
        };
        assert!(DirectionalProcedure
            .calculate_pressure(&input, SurfaceType::SideWall)
            .is_err());
    }

    #[test]
    fn test_bad_height() {
        let input = WindInput {
            mean_roof_height: 0.0,
            ..building()
        };
        assert!(DirectionalProcedure
            .calculate_pressure(&input, SurfaceType::SideWall)
            .unwrap_err()
            .is_caller_error());
    }
}
