//! Axis resolution over sorted anchor values.
//!
//! A query on an anchor axis is first clamped into the axis domain, then
//! either matched to a single anchor (within [`ANCHOR_EPSILON`]) or
//! bracketed by the adjacent pair of anchors that surround it.
//!
//! Out-of-range queries are clamped rather than rejected; nothing here
//! fails on a caller value. The only error is an empty anchor axis.
//!
//! # Example
//!
//! ```
//! use xwind_core::math::axis::{clamp, locate, AxisPosition};
//!
//! let angles: [f64; 3] = [10.0, 15.0, 20.0];
//!
//! assert_eq!(clamp(95.0, 10.0, 20.0), 20.0);
//! assert_eq!(locate(15.0, &angles).unwrap(), AxisPosition::Exact { index: 1 });
//!
//! match locate(17.5, &angles).unwrap() {
//!     AxisPosition::Between(bracket) => {
//!         assert_eq!((bracket.lower, bracket.upper), (1, 2));
//!         assert!((bracket.t - 0.5).abs() < 1e-12);
//!     }
//!     other => panic!("expected a bracket, got {:?}", other),
//! }
//! ```

use crate::types::InterpolationError;
use num_traits::Float;

/// Tolerance used when comparing a query against a tabulated anchor.
pub const ANCHOR_EPSILON: f64 = 1e-9;

/// Adjacent pair of anchors surrounding a query, with the interpolation fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Index of the lower anchor
    pub lower: usize,
    /// Index of the upper anchor (equal to `lower` when snapped to an edge)
    pub upper: usize,
    /// Fraction `(x - lower) / (upper - lower)`, 0 for a degenerate bracket
    pub t: T,
}

/// Where a query falls on an anchor axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisPosition<T> {
    /// The query coincides with the anchor at `index`.
    Exact {
        /// Index of the matching anchor
        index: usize,
    },
    /// The query lies strictly between two anchors.
    Between(Bracket<T>),
}

/// Bound `value` to `[min, max]`.
///
/// Never fails. A NaN query is returned unchanged.
#[inline]
pub fn clamp<T: Float>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Find the anchor equal to `value` within [`ANCHOR_EPSILON`].
///
/// Anchors are distinct and far apart relative to the tolerance, so at
/// most one can match.
pub fn match_exact<T: Float>(value: T, anchors: &[T]) -> Option<usize> {
    let epsilon = T::from(ANCHOR_EPSILON).unwrap_or_else(T::epsilon);
    anchors
        .iter()
        .position(|&anchor| (value - anchor).abs() < epsilon)
}

/// Find the adjacent anchors `(lower, upper)` with `lower <= value <= upper`.
///
/// `value` is expected to be clamped into `[anchors[0], anchors[n-1]]`
/// already. If it is not, the bracket snaps to the nearest edge anchor
/// with `t = 0` instead of failing.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - `anchors` is empty
pub fn bracket<T: Float>(value: T, anchors: &[T]) -> Result<Bracket<T>, InterpolationError> {
    if anchors.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }

    for (i, pair) in anchors.windows(2).enumerate() {
        let (left, right) = (pair[0], pair[1]);
        if value >= left && value <= right {
            let t = if right == left {
                T::zero()
            } else {
                (value - left) / (right - left)
            };
            return Ok(Bracket {
                lower: i,
                upper: i + 1,
                t,
            });
        }
    }

    // Unreachable after clamping; snap to the nearest edge
    let edge = if value <= anchors[0] {
        0
    } else {
        anchors.len() - 1
    };
    Ok(Bracket {
        lower: edge,
        upper: edge,
        t: T::zero(),
    })
}

/// Clamp-free location of `value` on `anchors`: exact match first, bracket otherwise.
///
/// # Errors
///
/// * `InterpolationError::InsufficientData` - `anchors` is empty
pub fn locate<T: Float>(value: T, anchors: &[T]) -> Result<AxisPosition<T>, InterpolationError> {
    if let Some(index) = match_exact(value, anchors) {
        return Ok(AxisPosition::Exact { index });
    }
    bracket(value, anchors).map(AxisPosition::Between)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ANGLES: [f64; 4] = [10.0, 15.0, 20.0, 90.0];

    #[test]
    fn test_clamp_inside_and_outside() {
        assert_eq!(clamp(0.3, 0.25, 1.0), 0.3);
        assert_eq!(clamp(0.1, 0.25, 1.0), 0.25);
        assert_eq!(clamp(4.0, 0.25, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_nan_passthrough() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_match_exact_within_tolerance() {
        assert_eq!(match_exact(15.0 + 1e-10, &ANGLES), Some(1));
        assert_eq!(match_exact(90.0, &ANGLES), Some(3));
    }

    #[test]
    fn test_match_exact_outside_tolerance() {
        assert_eq!(match_exact(15.0 + 1e-6, &ANGLES), None);
        assert_eq!(match_exact(12.0, &ANGLES), None);
    }

    #[test]
    fn test_bracket_interior() {
        let b = bracket(12.5, &ANGLES).unwrap();
        assert_eq!((b.lower, b.upper), (0, 1));
        assert_relative_eq!(b.t, 0.5, epsilon = 1e-12);

        let b = bracket(55.0, &ANGLES).unwrap();
        assert_eq!((b.lower, b.upper), (2, 3));
        assert_relative_eq!(b.t, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bracket_on_anchor_uses_first_segment() {
        let b = bracket(15.0, &ANGLES).unwrap();
        assert_eq!((b.lower, b.upper), (0, 1));
        assert_eq!(b.t, 1.0);
    }

    #[test]
    fn test_bracket_snaps_when_unclamped() {
        let low = bracket(-5.0, &ANGLES).unwrap();
        assert_eq!((low.lower, low.upper, low.t), (0, 0, 0.0));

        let high = bracket(120.0, &ANGLES).unwrap();
        assert_eq!((high.lower, high.upper, high.t), (3, 3, 0.0));
    }

    #[test]
    fn test_bracket_single_anchor() {
        let b = bracket(7.0, &[7.0]).unwrap();
        assert_eq!((b.lower, b.upper, b.t), (0, 0, 0.0));
    }

    #[test]
    fn test_bracket_empty_axis() {
        let result = bracket(1.0, &[] as &[f64]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_locate_prefers_exact() {
        assert_eq!(
            locate(20.0, &ANGLES).unwrap(),
            AxisPosition::Exact { index: 2 }
        );
        assert!(matches!(
            locate(19.0, &ANGLES).unwrap(),
            AxisPosition::Between(Bracket { lower: 1, upper: 2, .. })
        ));
    }

    #[test]
    fn test_f32_axis() {
        let anchors: [f32; 3] = [0.0, 1.0, 2.0];
        assert_eq!(match_exact(1.0_f32, &anchors), Some(1));
        let b = bracket(1.5_f32, &anchors).unwrap();
        assert!((b.t - 0.5).abs() < 1e-6);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_clamp_stays_in_domain(value in -1e6..1e6_f64) {
                let c = clamp(value, 10.0, 90.0);
                prop_assert!((10.0..=90.0).contains(&c));
            }

            #[test]
            fn test_bracket_fraction_in_unit_interval(value in 10.0..90.0_f64) {
                let b = bracket(value, &ANGLES).unwrap();
                prop_assert!(b.t >= 0.0 && b.t <= 1.0);
                prop_assert!(ANGLES[b.lower] <= value && value <= ANGLES[b.upper]);
            }
        }
    }
}
