//! Linear blending of coefficient values.

/// A value that can be linearly blended with another of the same type.
///
/// Implementations must return `self` exactly at `t = 0` and `other`
/// exactly at `t = 1`, so that lookups at tabulated anchors reproduce the
/// stored value bit-for-bit. The `(1 - t) * a + t * b` form has this
/// property for finite `a` and `b`.
///
/// Compound coefficients (e.g. a pair of pressure coefficients sharing one
/// grid) implement this component-wise.
///
/// # Example
///
/// ```
/// use xwind_core::math::blend::Blend;
///
/// assert_eq!((-0.7_f64).blend(-0.9, 0.0), -0.7);
/// assert_eq!((-0.7_f64).blend(-0.9, 1.0), -0.9);
/// assert!(((-0.7_f64).blend(-0.9, 0.5) - (-0.8)).abs() < 1e-12);
/// ```
pub trait Blend: Copy {
    /// Blend `self` towards `other` by fraction `t` in `[0, 1]`.
    fn blend(self, other: Self, t: f64) -> Self;
}

impl Blend for f64 {
    #[inline]
    fn blend(self, other: Self, t: f64) -> Self {
        (1.0 - t) * self + t * other
    }
}

impl Blend for f32 {
    #[inline]
    fn blend(self, other: Self, t: f64) -> Self {
        let t = t as f32;
        (1.0 - t) * self + t * other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for (a, b) in [(-0.7_f64, -0.9), (0.1, 0.3), (-1.3, -0.7), (0.0, 0.8)] {
            assert_eq!(a.blend(b, 0.0), a);
            assert_eq!(a.blend(b, 1.0), b);
        }
    }

    #[test]
    fn test_midpoint() {
        assert!((0.2_f64.blend(0.4, 0.5) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_f32_blend() {
        assert!((1.0_f32.blend(3.0, 0.25) - 1.5).abs() < 1e-6);
    }
}
