//! Interpolation methods over tabulated anchors.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation over borrowed anchor slices
//! - [`BilinearInterpolator`]: Two-axis interpolation over an [`AnchorTable2D`](super::anchor_table::AnchorTable2D),
//!   with an exact-column short-circuit and domain clamping
//!
//! ## Core Trait
//!
//! 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Strict lookup inside the domain
//! - `interpolate_clamped(x: T) -> Result<T, InterpolationError>`: Lookup after clamping into the domain
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! ## Example
//!
//! ```
//! use xwind_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let areas = [100.0, 250.0, 1000.0];
//! let factors = [1.0, 0.9, 0.8];
//!
//! let curve = LinearInterpolator::new(&areas, &factors).unwrap();
//! assert_eq!(curve.domain(), (100.0, 1000.0));
//! assert!(curve.interpolate(50.0).is_err());
//! assert_eq!(curve.interpolate_clamped(50.0).unwrap(), 1.0);
//! ```

mod bilinear;
mod linear;
mod traits;

// Re-export public types at module level
pub use bilinear::BilinearInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;
