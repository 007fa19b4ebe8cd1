//! Terrain exposure constants, ASCE 7-22 Table 26.11-1.

use xwind_core::types::ExposureCategory;

/// Power-law and gust constants for one exposure category.
///
/// Lengths are in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerrainExposureConstants {
    /// 3-s gust speed power-law exponent
    pub alpha: f64,
    /// Nominal height of the atmospheric boundary layer
    pub zg: f64,
    /// Mean hourly wind speed exponent
    pub alpha_hat: f64,
    /// Mean hourly wind speed factor
    pub b_hat: f64,
    /// Turbulence exponent
    pub alpha_bar: f64,
    /// Turbulence factor
    pub b_bar: f64,
    /// Turbulence intensity factor
    pub c: f64,
    /// Integral length scale factor
    pub l: f64,
    /// Integral length scale power-law exponent
    pub epsilon_bar: f64,
    /// Minimum height used for the equivalent height of the structure
    pub z_min: f64,
}

static EXPOSURE_B: TerrainExposureConstants = TerrainExposureConstants {
    alpha: 7.5,
    zg: 3280.0,
    alpha_hat: 1.0 / 7.5,
    b_hat: 0.84,
    alpha_bar: 1.0 / 4.5,
    b_bar: 0.47,
    c: 0.30,
    l: 320.0,
    epsilon_bar: 1.0 / 3.0,
    z_min: 30.0,
};

static EXPOSURE_C: TerrainExposureConstants = TerrainExposureConstants {
    alpha: 9.8,
    zg: 2460.0,
    alpha_hat: 1.0 / 9.8,
    b_hat: 1.00,
    alpha_bar: 1.0 / 6.4,
    b_bar: 0.66,
    c: 0.20,
    l: 500.0,
    epsilon_bar: 1.0 / 5.0,
    z_min: 15.0,
};

static EXPOSURE_D: TerrainExposureConstants = TerrainExposureConstants {
    alpha: 11.5,
    zg: 1935.0,
    alpha_hat: 1.0 / 11.5,
    b_hat: 1.09,
    alpha_bar: 1.0 / 8.0,
    b_bar: 0.78,
    c: 0.15,
    l: 650.0,
    epsilon_bar: 1.0 / 8.0,
    z_min: 7.0,
};

/// Constants for `exposure`.
///
/// # Example
///
/// ```
/// use xwind_asce722::tables::terrain::terrain_constants;
/// use xwind_core::types::ExposureCategory;
///
/// let c = terrain_constants(ExposureCategory::C);
/// assert_eq!((c.alpha, c.zg), (9.8, 2460.0));
/// ```
pub fn terrain_constants(exposure: ExposureCategory) -> &'static TerrainExposureConstants {
    match exposure {
        ExposureCategory::B => &EXPOSURE_B,
        ExposureCategory::C => &EXPOSURE_C,
        ExposureCategory::D => &EXPOSURE_D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponents_are_reciprocals() {
        for exposure in ExposureCategory::ALL {
            let c = terrain_constants(exposure);
            assert!((c.alpha * c.alpha_hat - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rougher_terrain_has_deeper_boundary_layer() {
        let b = terrain_constants(ExposureCategory::B);
        let c = terrain_constants(ExposureCategory::C);
        let d = terrain_constants(ExposureCategory::D);
        assert!(b.zg > c.zg && c.zg > d.zg);
        assert!(b.z_min > c.z_min && c.z_min > d.z_min);
    }
}
