//! Roof external pressure coefficients, ASCE 7-22 Figure 27.3-1.
//!
//! Rows are keyed by mean-roof-height to length ratio `h/L`; columns by
//! roof angle in degrees. Every row carries every column anchor.

use xwind_core::math::anchor_table::AnchorTable2D;
use xwind_core::math::axis::clamp;
use xwind_core::math::blend::Blend;

/// The two windward-roof coefficients tabulated for each (h/L, angle) cell.
///
/// Where the figure lists two values, `cp1` is the first (usually the more
/// negative) and `cp2` the second; the load case using each must be checked.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpPair {
    /// Primary coefficient
    pub cp1: f64,
    /// Secondary coefficient
    pub cp2: f64,
}

impl CpPair {
    /// Create a coefficient pair.
    pub const fn new(cp1: f64, cp2: f64) -> Self {
        Self { cp1, cp2 }
    }
}

impl Blend for CpPair {
    #[inline]
    fn blend(self, other: Self, t: f64) -> Self {
        Self {
            cp1: self.cp1.blend(other.cp1, t),
            cp2: self.cp2.blend(other.cp2, t),
        }
    }
}

const ROOF_RATIOS: [f64; 3] = [0.25, 0.5, 1.0];

const WINDWARD_ANGLES: [f64; 11] = [
    10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 45.0, 60.0, 70.0, 80.0, 90.0,
];

const LEEWARD_ANGLES: [f64; 3] = [10.0, 15.0, 20.0];

/// Windward roof coefficients, wind normal to ridge, angle ≥ 10°.
///
/// Above 45° the coefficient is `0.01θ` for both values.
pub static WINDWARD_CP: AnchorTable2D<CpPair> = AnchorTable2D::new(
    "windward roof",
    &ROOF_RATIOS,
    &WINDWARD_ANGLES,
    &[
        // h/L = 0.25
        &[
            (10.0, CpPair::new(-0.7, -0.18)),
            (15.0, CpPair::new(-0.5, 0.0)),
            (20.0, CpPair::new(-0.3, 0.2)),
            (25.0, CpPair::new(-0.2, 0.3)),
            (30.0, CpPair::new(-0.2, 0.3)),
            (35.0, CpPair::new(0.0, 0.4)),
            (45.0, CpPair::new(0.4, 0.4)),
            (60.0, CpPair::new(0.6, 0.6)),
            (70.0, CpPair::new(0.7, 0.7)),
            (80.0, CpPair::new(0.8, 0.8)),
            (90.0, CpPair::new(0.8, 0.8)),
        ],
        // h/L = 0.5
        &[
            (10.0, CpPair::new(-0.9, -0.18)),
            (15.0, CpPair::new(-0.7, -0.18)),
            (20.0, CpPair::new(-0.4, 0.0)),
            (25.0, CpPair::new(-0.3, 0.2)),
            (30.0, CpPair::new(-0.2, 0.2)),
            (35.0, CpPair::new(-0.2, 0.3)),
            (45.0, CpPair::new(0.0, 0.4)),
            (60.0, CpPair::new(0.6, 0.6)),
            (70.0, CpPair::new(0.7, 0.7)),
            (80.0, CpPair::new(0.8, 0.8)),
            (90.0, CpPair::new(0.8, 0.8)),
        ],
        // h/L = 1.0
        &[
            (10.0, CpPair::new(-1.3, -0.18)),
            (15.0, CpPair::new(-1.0, -0.18)),
            (20.0, CpPair::new(-0.7, 0.0)),
            (25.0, CpPair::new(-0.5, 0.2)),
            (30.0, CpPair::new(-0.3, 0.2)),
            (35.0, CpPair::new(-0.2, 0.2)),
            (45.0, CpPair::new(0.0, 0.3)),
            (60.0, CpPair::new(0.6, 0.6)),
            (70.0, CpPair::new(0.7, 0.7)),
            (80.0, CpPair::new(0.8, 0.8)),
            (90.0, CpPair::new(0.8, 0.8)),
        ],
    ],
);

/// Leeward roof coefficients, wind normal to ridge.
///
/// Steeper roofs use the 20° column through clamping.
pub static LEEWARD_CP: AnchorTable2D<f64> = AnchorTable2D::new(
    "leeward roof",
    &ROOF_RATIOS,
    &LEEWARD_ANGLES,
    &[
        &[(10.0, -0.3), (15.0, -0.5), (20.0, -0.6)],
        &[(10.0, -0.5), (15.0, -0.5), (20.0, -0.6)],
        &[(10.0, -0.7), (15.0, -0.6), (20.0, -0.6)],
    ],
);

/// h/L at or below which a zone uses its low-ratio coefficient.
pub const ZONE_LOW_RATIO: f64 = 0.5;

/// h/L at or above which a zone uses its high-ratio coefficient.
pub const ZONE_HIGH_RATIO: f64 = 1.0;

/// One horizontal-distance zone of a roof with wind parallel to the ridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRecord {
    /// Horizontal distance from the windward edge, e.g. `"0 to h/2"`
    pub label: &'static str,
    /// `Cp1` for h/L ≤ 0.5
    pub cp_low: f64,
    /// `Cp1` for h/L ≥ 1.0
    pub cp_high: f64,
    /// `Cp2`, independent of h/L
    pub cp_alternate: f64,
}

impl ZoneRecord {
    /// Create a zone record.
    pub const fn new(label: &'static str, cp_low: f64, cp_high: f64, cp_alternate: f64) -> Self {
        Self {
            label,
            cp_low,
            cp_high,
            cp_alternate,
        }
    }

    /// `Cp1` at `h_over_l`, linear between the two breakpoints and flat outside.
    ///
    /// # Example
    ///
    /// ```
    /// use xwind_asce722::tables::roof::PARALLEL_TO_RIDGE_ZONES;
    ///
    /// let zone = &PARALLEL_TO_RIDGE_ZONES[0];
    /// assert_eq!(zone.cp_at(0.3), -0.9);
    /// assert!((zone.cp_at(0.75) - (-1.1)).abs() < 1e-12);
    /// ```
    pub fn cp_at(&self, h_over_l: f64) -> f64 {
        let r = clamp(h_over_l, ZONE_LOW_RATIO, ZONE_HIGH_RATIO);
        let t = (r - ZONE_LOW_RATIO) / (ZONE_HIGH_RATIO - ZONE_LOW_RATIO);
        self.cp_low.blend(self.cp_high, t)
    }

    /// True when every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.cp_low.is_finite() && self.cp_high.is_finite() && self.cp_alternate.is_finite()
    }
}

/// Number of parallel-to-ridge zones.
pub const ZONE_COUNT: usize = 4;

/// Roof zones for wind parallel to the ridge (and flat roofs), windward edge first.
pub static PARALLEL_TO_RIDGE_ZONES: [ZoneRecord; ZONE_COUNT] = [
    ZoneRecord::new("0 to h/2", -0.90, -1.30, -0.18),
    ZoneRecord::new("h/2 to h", -0.90, -0.70, -0.18),
    ZoneRecord::new("h to 2h", -0.50, -0.70, -0.18),
    ZoneRecord::new("> 2h", -0.30, -0.70, -0.18),
];
