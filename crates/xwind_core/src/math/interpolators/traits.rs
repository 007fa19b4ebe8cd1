//! Common interface for 1D interpolators.

use crate::math::axis::clamp;
use crate::types::InterpolationError;
use num_traits::Float;

/// A 1D interpolator over a bounded domain.
pub trait Interpolator<T: Float> {
    /// Interpolate at `x`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::OutOfBounds` - `x` lies outside [`domain`](Self::domain)
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the `(min, max)` range on which [`interpolate`](Self::interpolate) succeeds.
    fn domain(&self) -> (T, T);

    /// Interpolate at `x` after clamping it into the domain (flat extrapolation).
    fn interpolate_clamped(&self, x: T) -> Result<T, InterpolationError> {
        let (min, max) = self.domain();
        self.interpolate(clamp(x, min, max))
    }
}
