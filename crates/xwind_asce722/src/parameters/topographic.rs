//! Topographic factor, ASCE 7-22 Section 26.8.
//!
//! ```text
//! Kzt = (1 + K1 K2 K3)²
//! K1  = (H / Lh) m           m by feature and exposure
//! K2  = max(1 - |x| / (μ Lh), 0)
//! K3  = exp(-γ z / Lh)
//! ```
//!
//! Flat terrain gives 1.0 for every multiplier and for `Kzt`.

use xwind_core::types::{CrestPosition, ExposureCategory, TopographyType};

use crate::error::{require_number, require_positive, CoefficientError};

/// `K1` shape multiplier.
///
/// # Arguments
///
/// * `h` - Height of the hill or escarpment relative to upwind terrain (> 0)
/// * `lh` - Upwind distance to where the difference is half of `h` (> 0)
pub fn k1(
    topography: TopographyType,
    exposure: ExposureCategory,
    h: f64,
    lh: f64,
) -> Result<f64, CoefficientError> {
    if topography == TopographyType::None {
        return Ok(1.0);
    }
    let h = require_positive("H", h)?;
    let lh = require_positive("Lh", lh)?;

    use xwind_core::types::ExposureCategory::{B, C, D};
    let m = match (topography, exposure) {
        (TopographyType::None, _) => 1.0,
        (TopographyType::RidgeOrValley, B) => 1.30,
        (TopographyType::RidgeOrValley, C) => 1.45,
        (TopographyType::RidgeOrValley, D) => 1.55,
        (TopographyType::Escarpment, B) => 0.75,
        (TopographyType::Escarpment, C) => 0.85,
        (TopographyType::Escarpment, D) => 0.95,
        (TopographyType::AxisymmetricalHill, B) => 0.95,
        (TopographyType::AxisymmetricalHill, C) => 1.05,
        (TopographyType::AxisymmetricalHill, D) => 1.15,
    };

    Ok(h / lh * m)
}

/// `K2` reduction with distance `x` from the crest, on either side.
pub fn k2(
    topography: TopographyType,
    position: CrestPosition,
    lh: f64,
    x: f64,
) -> Result<f64, CoefficientError> {
    if topography == TopographyType::None {
        return Ok(1.0);
    }
    let x = require_number("x", x)?;
    let lh = require_positive("Lh", lh)?;

    let mu = match (topography, position) {
        (TopographyType::Escarpment, CrestPosition::DownwindOfCrest) => 4.0,
        _ => 1.5,
    };

    Ok((1.0 - x.abs() / (mu * lh)).max(0.0))
}

/// `K3` reduction with height `z` above local ground.
pub fn k3(topography: TopographyType, z: f64, lh: f64) -> Result<f64, CoefficientError> {
    if topography == TopographyType::None {
        return Ok(1.0);
    }
    let z = require_positive("z", z)?;
    let lh = require_positive("Lh", lh)?;

    let gamma = match topography {
        TopographyType::None => 1.0,
        TopographyType::RidgeOrValley => 3.0,
        TopographyType::Escarpment => 2.5,
        TopographyType::AxisymmetricalHill => 4.0,
    };

    Ok((-gamma * z / lh).exp())
}

/// Combine the three multipliers into `Kzt`.
#[inline]
pub fn kzt(topography: TopographyType, k1: f64, k2: f64, k3: f64) -> f64 {
    match topography {
        TopographyType::None => 1.0,
        _ => (1.0 + k1 * k2 * k3).powi(2),
    }
}

/// The three multipliers and the resulting `Kzt` at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopographicMultipliers {
    /// Shape multiplier
    pub k1: f64,
    /// Distance multiplier
    pub k2: f64,
    /// Height multiplier
    pub k3: f64,
    /// Topographic factor
    pub kzt: f64,
}

/// A topographic feature as seen from one site.
///
/// # Example
///
/// ```
/// use xwind_asce722::parameters::TopographicFactor;
/// use xwind_core::types::{CrestPosition, ExposureCategory, TopographyType};
///
/// let site = TopographicFactor {
///     topography: TopographyType::Escarpment,
///     position: CrestPosition::DownwindOfCrest,
///     exposure: ExposureCategory::C,
/// };
/// let m = site.at(80.0, 100.0, 50.0, 30.0).unwrap();
/// assert!(m.kzt > 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopographicFactor {
    /// Kind of feature
    pub topography: TopographyType,
    /// Site position relative to the crest
    pub position: CrestPosition,
    /// Exposure category upwind of the feature
    pub exposure: ExposureCategory,
}

impl TopographicFactor {
    /// Multipliers for a feature of height `h` and half-height distance `lh`,
    /// at distance `x` from the crest and height `z` above ground.
    pub fn at(&self, h: f64, lh: f64, x: f64, z: f64) -> Result<TopographicMultipliers, CoefficientError> {
        let k1 = k1(self.topography, self.exposure, h, lh)?;
        let k2 = k2(self.topography, self.position, lh, x)?;
        let k3 = k3(self.topography, z, lh)?;

        Ok(TopographicMultipliers {
            k1,
            k2,
            k3,
            kzt: kzt(self.topography, k1, k2, k3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_terrain_is_unity() {
        let site = TopographicFactor {
            topography: TopographyType::None,
            position: CrestPosition::UpwindOfCrest,
            exposure: ExposureCategory::B,
        };
        let m = site.at(50.0, 100.0, 10.0, 30.0).unwrap();
        assert_eq!((m.k1, m.k2, m.k3, m.kzt), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_k1() {
        assert_relative_eq!(
            k1(TopographyType::RidgeOrValley, ExposureCategory::C, 50.0, 100.0).unwrap(),
            0.725,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            k1(TopographyType::AxisymmetricalHill, ExposureCategory::D, 100.0, 100.0).unwrap(),
            1.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_k2_mu_by_position() {
        let upwind = k2(TopographyType::Escarpment, CrestPosition::UpwindOfCrest, 100.0, 75.0).unwrap();
        let downwind =
            k2(TopographyType::Escarpment, CrestPosition::DownwindOfCrest, 100.0, 75.0).unwrap();
        assert_relative_eq!(upwind, 0.5, epsilon = 1e-12);
        assert_relative_eq!(downwind, 1.0 - 75.0 / 400.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k2_at_crest_and_upwind() {
        let crest = k2(TopographyType::RidgeOrValley, CrestPosition::UpwindOfCrest, 100.0, 0.0);
        assert_eq!(crest.unwrap(), 1.0);
        let upwind = k2(TopographyType::RidgeOrValley, CrestPosition::UpwindOfCrest, 100.0, -75.0);
        assert_relative_eq!(upwind.unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_terrain_skips_validation() {
        assert_eq!(k1(TopographyType::None, ExposureCategory::B, 0.0, -1.0).unwrap(), 1.0);
        assert_eq!(k3(TopographyType::None, 0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_k2_floors_at_zero() {
        assert_eq!(
            k2(TopographyType::RidgeOrValley, CrestPosition::DownwindOfCrest, 100.0, 500.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_k3() {
        assert_relative_eq!(
            k3(TopographyType::AxisymmetricalHill, 25.0, 100.0).unwrap(),
            (-1.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kzt() {
        assert_relative_eq!(
            kzt(TopographyType::Escarpment, 0.5, 0.5, 1.0),
            1.5625,
            epsilon = 1e-12
        );
        assert_eq!(kzt(TopographyType::None, 0.5, 0.5, 1.0), 1.0);
    }

    #[test]
    fn test_inputs_must_be_positive() {
        assert!(k1(TopographyType::Escarpment, ExposureCategory::B, 0.0, 100.0)
            .unwrap_err()
            .is_caller_error());
        assert!(k2(TopographyType::Escarpment, CrestPosition::UpwindOfCrest, 100.0, f64::NAN).is_err());
        assert!(k3(TopographyType::Escarpment, -5.0, 100.0).is_err());
    }
}
