//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator over borrowed anchor data.
///
/// Borrows ascending x-anchors and their y-values, so interpolators over
/// `static` tables can be built on the fly without allocating. Generic
/// over `T: Float`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Anchors must already be strictly ascending; unlike an owning
/// interpolator there is no sorting step. At least 2 points are required.
///
/// # Example
///
/// ```
/// use xwind_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs: [f64; 3] = [1.0, 2.0, 4.0];
/// let ys: [f64; 3] = [-0.5, -0.3, -0.2];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (1.0, 4.0));
/// assert!((interp.interpolate(3.0).unwrap() - (-0.25)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolator<'a, T: Float> {
    /// Ascending x-anchors
    xs: &'a [T],
    /// Values at each anchor
    ys: &'a [T],
}

impl<'a, T: Float> LinearInterpolator<'a, T> {
    /// Construct a linear interpolator from anchor and value slices.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly ascending x-anchors
    /// * `ys` - Corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite anchors
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - Anchors not strictly ascending
    ///
    /// # Example
    ///
    /// ```
    /// use xwind_core::math::interpolators::LinearInterpolator;
    ///
    /// // Valid construction
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// // Insufficient data
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    ///
    /// // Unsorted anchors
    /// let result = LinearInterpolator::new(&[1.0, 0.0], &[0.0, 1.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &'a [T], ys: &'a [T]) -> Result<Self, InterpolationError> {
        // Validate array lengths match
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        // Validate minimum data points
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "anchors and values must be finite".to_string(),
            ));
        }

        for (i, pair) in xs.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(InterpolationError::NonMonotonicData { index: i + 1 });
            }
        }

        Ok(Self { xs, ys })
    }

    /// Returns the x-anchors.
    #[inline]
    pub fn xs(&self) -> &'a [T] {
        self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &'a [T] {
        self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        // pos can be 0 (x < xs[0]) or n (x >= xs[n-1])
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<'_, T> {
    /// Interpolate value at point `x` using piecewise linear interpolation.
    ///
    /// # Formula
    ///
    /// ```text
    /// t = (x - x0) / (x1 - x0)
    /// y = (1 - t) * y0 + t * y1
    /// ```
    ///
    /// The weighted form returns `y0` and `y1` exactly at the segment ends.
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    /// * `Err(InterpolationError::InvalidInput)` - If `x` is NaN
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if x.is_nan() {
            return Err(InterpolationError::InvalidInput(
                "query point is NaN".to_string(),
            ));
        }

        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        let t = (x - x0) / (x1 - x0);
        Ok((T::one() - t) * y0 + t * y1)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
