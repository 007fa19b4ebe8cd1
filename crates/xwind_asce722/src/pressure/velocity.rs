//! Velocity pressure exposure coefficient and velocity pressure.
//!
//! # Formulas
//!
//! ```text
//! Kz = 2.41 (15 / zg)^(2/α)    z < 15 ft
//! Kz = 2.41 (z / zg)^(2/α)     15 ft ≤ z ≤ zg
//! Kz = 2.41                    zg < z ≤ 3280 ft
//!
//! qz = 0.00256 Kz Kzt Ke V²    (psf, V in mph)
//! ```

use tracing::trace;
use xwind_core::types::ExposureCategory;

use crate::error::{require_positive, CoefficientError};
use crate::tables::terrain::terrain_constants;

/// Leading constant of the `Kz` power law.
pub const KZ_COEFFICIENT: f64 = 2.41;

/// Height below which `Kz` is held constant (ft).
pub const KZ_MIN_HEIGHT: f64 = 15.0;

/// Highest height `Kz` is defined for (ft).
pub const KZ_MAX_HEIGHT: f64 = 3280.0;

/// Converts mph² to psf, including air density.
pub const VELOCITY_PRESSURE_CONSTANT: f64 = 0.00256;

const SERIES_TOLERANCE: f64 = 1e-9;

/// Largest number of samples [`kz_series`] will produce.
pub const MAX_SERIES_SAMPLES: usize = 100_000;

/// Velocity pressure exposure coefficient at height `z` (ft).
///
/// # Errors
///
/// * `InvalidGeometry` - `z`, `zg` or `alpha` is not positive, or `z` > 3280 ft
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::velocity::kz;
///
/// let k = kz(30.0, 2460.0, 9.8).unwrap();
/// assert!((k - 0.98).abs() < 0.005);
/// ```
pub fn kz(z: f64, zg: f64, alpha: f64) -> Result<f64, CoefficientError> {
    let z = require_positive("z", z)?;
    let zg = require_positive("zg", zg)?;
    let alpha = require_positive("alpha", alpha)?;

    if z > KZ_MAX_HEIGHT {
        return Err(CoefficientError::InvalidGeometry {
            parameter: "z",
            value: z,
        });
    }

    let exponent = 2.0 / alpha;
    let k = if z < KZ_MIN_HEIGHT {
        KZ_COEFFICIENT * (KZ_MIN_HEIGHT / zg).powf(exponent)
    } else if z <= zg {
        KZ_COEFFICIENT * (z / zg).powf(exponent)
    } else {
        KZ_COEFFICIENT
    };

    Ok(k)
}

/// `Kz` at height `z` for a terrain exposure category.
pub fn kz_for(exposure: ExposureCategory, z: f64) -> Result<f64, CoefficientError> {
    let constants = terrain_constants(exposure);
    kz(z, constants.zg, constants.alpha)
}

/// `(z, Kz)` samples from `z_start` to `z_end` inclusive, every `z_step`.
///
/// Heights are computed as `z_start + i * z_step`, capped at `z_end`. The
/// last sample is included when it lies within 1e-9 of `z_end`.
///
/// # Errors
///
/// * `InvalidGeometry` - `z_start` or `z_step` is not positive, `z_end` is
///   below `z_start` or above 3280 ft, or `z_step` is so small that the
///   series would exceed [`MAX_SERIES_SAMPLES`]
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::velocity::kz_series;
/// use xwind_core::types::ExposureCategory;
///
/// let series = kz_series(ExposureCategory::C, 15.0, 60.0, 15.0).unwrap();
/// let heights: Vec<f64> = series.iter().map(|(z, _)| *z).collect();
/// assert_eq!(heights, vec![15.0, 30.0, 45.0, 60.0]);
/// ```
pub fn kz_series(
    exposure: ExposureCategory,
    z_start: f64,
    z_end: f64,
    z_step: f64,
) -> Result<Vec<(f64, f64)>, CoefficientError> {
    let z_start = require_positive("z_start", z_start)?;
    let z_step = require_positive("z_step", z_step)?;
    if !(z_end >= z_start && z_end <= KZ_MAX_HEIGHT) {
        return Err(CoefficientError::InvalidGeometry {
            parameter: "z_end",
            value: z_end,
        });
    }

    let steps = ((z_end - z_start + SERIES_TOLERANCE) / z_step).floor();
    if !(steps < MAX_SERIES_SAMPLES as f64) {
        return Err(CoefficientError::InvalidGeometry {
            parameter: "z_step",
            value: z_step,
        });
    }
    let count = steps as usize + 1;
    trace!(%exposure, z_start, z_end, z_step, count, "kz series");

    (0..count)
        .map(|i| {
            let z = (z_start + i as f64 * z_step).min(z_end);
            kz_for(exposure, z).map(|k| (z, k))
        })
        .collect()
}

/// Velocity pressure (psf) at a height with exposure coefficient `kz`.
///
/// # Arguments
///
/// * `v` - Basic wind speed (mph)
/// * `kz` - Velocity pressure exposure coefficient
/// * `kzt` - Topographic factor
/// * `ke` - Ground elevation factor
///
/// # Example
///
/// ```
/// use xwind_asce722::pressure::velocity::qz;
///
/// let q = qz(115.0, 0.98, 1.0, 1.0);
/// assert!((q - 33.18).abs() < 0.01);
/// ```
#[inline]
pub fn qz(v: f64, kz: f64, kzt: f64, ke: f64) -> f64 {
    VELOCITY_PRESSURE_CONSTANT * kz * kzt * ke * v * v
}

/// [`qz`] for each exposure coefficient in `kzs`, in order.
pub fn qz_series(v: f64, kzs: &[f64], kzt: f64, ke: f64) -> Vec<f64> {
    kzs.iter().map(|&k| qz(v, k, kzt, ke)).collect()
}

/// Velocity pressure at mean roof height, where `kh` is `Kz` at that height.
#[inline]
pub fn qh(v: f64, kh: f64, kzt: f64, ke: f64) -> f64 {
    qz(v, kh, kzt, ke)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kz_reference_values() {
        assert_relative_eq!(kz_for(ExposureCategory::C, 30.0).unwrap(), 0.98, epsilon = 5e-3);
        assert_relative_eq!(kz_for(ExposureCategory::D, 15.0).unwrap(), 1.035, epsilon = 5e-3);
        assert_relative_eq!(kz_for(ExposureCategory::B, 30.0).unwrap(), 0.689, epsilon = 1e-3);
    }

    #[test]
    fn test_kz_constant_below_fifteen_feet() {
        for exposure in ExposureCategory::ALL {
            assert_eq!(
                kz_for(exposure, 5.0).unwrap(),
                kz_for(exposure, KZ_MIN_HEIGHT).unwrap()
            );
        }
    }

    #[test]
    fn test_kz_capped_above_gradient_height() {
        assert_eq!(kz_for(ExposureCategory::D, 2000.0).unwrap(), KZ_COEFFICIENT);
        assert_relative_eq!(
            kz_for(ExposureCategory::D, 1935.0).unwrap(),
            KZ_COEFFICIENT,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kz_rejects_out_of_range_heights() {
        for z in [0.0, -10.0, 3280.5, f64::NAN] {
            assert!(kz_for(ExposureCategory::C, z).unwrap_err().is_caller_error());
        }
        assert!(kz_for(ExposureCategory::B, KZ_MAX_HEIGHT).is_ok());
    }

    #[test]
    fn test_kz_rejects_bad_terrain() {
        assert!(kz(30.0, 0.0, 9.8).is_err());
        assert!(kz(30.0, 2460.0, -1.0).is_err());
    }

    #[test]
    fn test_series_inclusive_end() {
        let series = kz_series(ExposureCategory::B, 10.0, 10.3, 0.1).unwrap();
        assert_eq!(series.len(), 4);
        assert_relative_eq!(series[3].0, 10.3, epsilon = 1e-9);
    }

    #[test]
    fn test_series_single_point() {
        let series = kz_series(ExposureCategory::C, 30.0, 30.0, 5.0).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].1, kz_for(ExposureCategory::C, 30.0).unwrap());
    }

    #[test]
    fn test_series_increasing() {
        let series = kz_series(ExposureCategory::C, 15.0, 500.0, 5.0).unwrap();
        assert!(series.windows(2).all(|w| w[1].1 >= w[0].1));
    }

    #[test]
    fn test_series_rejects_bad_ranges() {
        assert!(kz_series(ExposureCategory::C, 30.0, 20.0, 5.0).is_err());
        assert!(kz_series(ExposureCategory::C, 0.0, 20.0, 5.0).is_err());
        assert!(kz_series(ExposureCategory::C, 10.0, 20.0, 0.0).is_err());
        assert!(kz_series(ExposureCategory::C, 10.0, 4000.0, 5.0).is_err());
    }

    #[test]
    fn test_series_rejects_tiny_step() {
        for step in [1e-300, 5e-324, 1e-9] {
            let err = kz_series(ExposureCategory::C, 15.0, 3280.0, step).unwrap_err();
            assert_eq!(
                err,
                CoefficientError::InvalidGeometry {
                    parameter: "z_step",
                    value: step,
                }
            );
        }
    }

    #[test]
    fn test_series_sample_limit() {
        let series = kz_series(ExposureCategory::C, 15.0, 1015.0, 1000.0 / 50_000.0).unwrap();
        assert_eq!(series.len(), 50_001);
        assert!(series[series.len() - 1].0 <= 1015.0);

        assert!(kz_series(ExposureCategory::C, 15.0, 1015.0, 1000.0 / 200_000.0)
            .unwrap_err()
            .is_caller_error());
    }

    #[test]
    fn test_series_last_height_never_exceeds_end() {
        let series = kz_series(ExposureCategory::B, 15.0, KZ_MAX_HEIGHT, 0.1).unwrap();
        let last = series[series.len() - 1].0;
        assert!(last <= KZ_MAX_HEIGHT);
        assert_relative_eq!(last, KZ_MAX_HEIGHT, epsilon = 1e-9);
    }

    #[test]
    fn test_qz() {
        assert_relative_eq!(qz(115.0, 0.98, 1.0, 1.0), 33.18, epsilon = 0.01);
        assert_relative_eq!(qh(100.0, 1.0, 1.0, 1.0), 25.6, epsilon = 1e-9);
    }

    #[test]
    fn test_qz_series_preserves_order() {
        let q = qz_series(100.0, &[0.5, 1.0, 2.0], 1.0, 1.0);
        assert_eq!(q.len(), 3);
        assert_relative_eq!(q[0], 12.8, epsilon = 1e-9);
        assert_relative_eq!(q[2], 51.2, epsilon = 1e-9);
    }
}
